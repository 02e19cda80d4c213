//! Model-response parsing: free text in, track identity out.
//!
//! Language models routinely wrap JSON answers in Markdown code fences, so
//! the adapter strips a leading fence marker (optionally tagged `json`,
//! case-insensitive) and a trailing fence before parsing. Parsing is
//! best-effort with a total fallback: this function can never fail, only
//! degrade to the raw title.

use serde::Deserialize;

use crate::domain::TrackIdentity;

/// The JSON object the model is instructed to return
#[derive(Debug, Deserialize)]
struct IdentityPayload {
    title: Option<String>,
    artist: Option<String>,
}

/// Convert a raw model response into a track identity.
///
/// - Unparsable text yields the fallback identity `(raw_title, "")`.
/// - A parsed object with missing keys defaults per-key: `title` to the
///   raw title, `artist` to empty.
pub fn identity_from_response(raw_title: &str, response: &str) -> TrackIdentity {
    let cleaned = strip_fences(response);

    match serde_json::from_str::<IdentityPayload>(cleaned) {
        Ok(payload) => TrackIdentity {
            song: payload.title.unwrap_or_else(|| raw_title.to_string()),
            artist: payload.artist.unwrap_or_default(),
        },
        Err(e) => {
            tracing::warn!("Model response was not valid JSON ({}), keeping raw title", e);
            TrackIdentity::fallback(raw_title)
        }
    }
}

/// Strip a leading ``` or ```json fence and a trailing ``` fence.
fn strip_fences(text: &str) -> &str {
    let mut t = text.trim();

    if let Some(rest) = t.strip_prefix("```") {
        let rest = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
        t = rest.trim_start();
    }

    if let Some(rest) = t.strip_suffix("```") {
        t = rest.trim_end();
    }

    t
}
