//! Filename sanitization.
//!
//! Output files are named after display strings coming from video titles and
//! model output, which routinely contain characters that are illegal on
//! common filesystems. The disallowed set also includes the full-width pipe
//! (U+FF5C) that YouTube titles use as a separator.

/// Characters stripped from filenames.
const DISALLOWED: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|', '｜'];

/// Remove filesystem-unsafe characters and trim surrounding whitespace.
///
/// Total function: never fails, empty input yields empty output, and the
/// result is stable under repeated application.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !DISALLOWED.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}
