//! yt-dlp subprocess invocation
//!
//! This module shells out to the `yt-dlp` command-line tool for media
//! extraction and download+transcode. This approach is more reliable than
//! bindings and works on all platforms where yt-dlp is installed.
//!
//! Install yt-dlp:
//! - Windows: `winget install yt-dlp.yt-dlp`
//! - macOS: `brew install yt-dlp`
//! - Linux: `apt install yt-dlp`, `pip install yt-dlp`, or equivalent

use std::path::Path;
use std::process::Command;

use super::FetchError;
use super::dto::ProbeOutput;
use crate::domain::RawMediaInfo;

/// Common installation paths for yt-dlp on Windows
#[cfg(windows)]
const YTDLP_PATHS: &[&str] = &[
    "yt-dlp", // In PATH
    r"C:\Program Files\yt-dlp\yt-dlp.exe",
    r"C:\Program Files (x86)\yt-dlp\yt-dlp.exe",
];

#[cfg(not(windows))]
const YTDLP_PATHS: &[&str] = &[
    "yt-dlp", // In PATH
    "/usr/bin/yt-dlp",
    "/usr/local/bin/yt-dlp",
    "/opt/homebrew/bin/yt-dlp",
];

/// Find the yt-dlp executable, checking common installation paths
fn find_ytdlp() -> Option<&'static str> {
    YTDLP_PATHS
        .iter()
        .find(|&path| {
            Command::new(path)
                .arg("--version")
                .output()
                .map(|o| o.status.success())
                .unwrap_or(false)
        })
        .map(|v| v as _)
}

/// Check if yt-dlp is available on the system
pub fn is_ytdlp_available() -> bool {
    find_ytdlp().is_some()
}

/// Get yt-dlp version string (for diagnostics)
pub fn get_ytdlp_version() -> Option<String> {
    let ytdlp = find_ytdlp()?;
    Command::new(ytdlp)
        .arg("--version")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
}

/// Resolve metadata for a URL without downloading anything
pub fn probe(url: &str) -> Result<RawMediaInfo, FetchError> {
    let ytdlp = find_ytdlp().ok_or(FetchError::ToolMissing)?;

    let output = Command::new(ytdlp)
        .args(["-J", "--no-warnings", url])
        .output()
        .map_err(|e| FetchError::Extractor(format!("Failed to run yt-dlp: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(FetchError::Extractor(stderr.trim().to_string()));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_probe_json(&stdout)
}

/// Download the URL, transcoding to the given codec/bitrate, with output
/// paths driven by `template` (a yt-dlp `-o` template ending in `.%(ext)s`).
///
/// Individual playlist-item failures are tolerated; the caller decides
/// whether the run produced a usable file.
pub fn download(url: &str, template: &Path, codec: &str, bitrate: &str) -> Result<(), FetchError> {
    let ytdlp = find_ytdlp().ok_or(FetchError::ToolMissing)?;

    let output = Command::new(ytdlp)
        .args(["-f", "bestaudio/best", "-x", "--audio-format", codec])
        .args(["--audio-quality", bitrate])
        .args(["--ignore-errors", "--force-overwrites", "--no-warnings"])
        .arg("-o")
        .arg(template)
        .arg(url)
        .output()
        .map_err(|e| FetchError::Extractor(format!("Failed to run yt-dlp: {}", e)))?;

    if !output.status.success() {
        // With --ignore-errors a partial playlist failure still exits
        // non-zero; surface it as a warning and let the caller check whether
        // the expected file materialized.
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::warn!("yt-dlp exited with errors: {}", stderr.trim());
    }

    Ok(())
}

/// Parse the JSON document printed by `yt-dlp -J`
pub(super) fn parse_probe_json(json: &str) -> Result<RawMediaInfo, FetchError> {
    let parsed: Option<ProbeOutput> = serde_json::from_str(json.trim())
        .map_err(|e| FetchError::Parse(format!("Failed to parse yt-dlp output: {}", e)))?;

    let probe = parsed.ok_or(FetchError::NoMediaInfo)?;
    Ok(to_media_info(probe))
}

/// Convert the probe DTO into our domain type.
///
/// Playlists may lack stream details at the top level; the first successful
/// entry fills in the extension and thumbnails in that case. The title stays
/// the top-level one (the playlist title), matching the extractor's own
/// reporting.
fn to_media_info(probe: ProbeOutput) -> RawMediaInfo {
    let first_entry = probe.entries.iter().flatten().next();

    let title = probe
        .title
        .unwrap_or_else(|| "unknown".to_string());

    let ext = probe
        .ext
        .or_else(|| first_entry.and_then(|e| e.ext.clone()))
        .unwrap_or_default();

    let thumbnails = if probe.thumbnails.is_empty() {
        first_entry.map(|e| e.thumbnails.clone()).unwrap_or_default()
    } else {
        probe.thumbnails
    };

    RawMediaInfo {
        title,
        ext,
        thumbnails: thumbnails.into_iter().filter_map(|t| t.url).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_probe_json() {
        let json = r#"{
            "title": "Artist - Song",
            "ext": "webm",
            "thumbnails": [{"url": "https://i.example.com/hq.jpg"}]
        }"#;

        let info = parse_probe_json(json).unwrap();

        assert_eq!(info.title, "Artist - Song");
        assert_eq!(info.ext, "webm");
        assert_eq!(info.best_thumbnail(), Some("https://i.example.com/hq.jpg"));
    }

    #[test]
    fn test_parse_probe_null_is_no_media() {
        let result = parse_probe_json("null");
        assert!(matches!(result, Err(FetchError::NoMediaInfo)));
    }

    #[test]
    fn test_parse_probe_garbage_is_parse_error() {
        let result = parse_probe_json("not json at all");
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_playlist_falls_back_to_first_entry() {
        let json = r#"{
            "title": "My Playlist",
            "entries": [
                null,
                {"title": "Track", "ext": "m4a", "thumbnails": [{"url": "https://i.example.com/t.jpg"}]}
            ]
        }"#;

        let info = parse_probe_json(json).unwrap();

        // Title stays the playlist title; stream details come from the entry
        assert_eq!(info.title, "My Playlist");
        assert_eq!(info.ext, "m4a");
        assert_eq!(info.best_thumbnail(), Some("https://i.example.com/t.jpg"));
    }

    #[test]
    fn test_missing_title_defaults_to_unknown() {
        let info = parse_probe_json(r#"{"ext": "webm"}"#).unwrap();
        assert_eq!(info.title, "unknown");
    }

    #[test]
    fn test_is_ytdlp_available_does_not_panic() {
        let _ = is_ytdlp_available();
    }
}
