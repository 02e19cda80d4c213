//! yt-dlp JSON output Data Transfer Objects
//!
//! These types match what `yt-dlp -J` prints for a resolved URL.
//! DO NOT add fields that aren't in the tool's output.
//! DO NOT use these types outside the fetcher module - convert to domain types.
//!
//! A URL may resolve to a single video or a playlist; playlists carry an
//! `entries` array whose items can be null when extraction of an individual
//! item failed.

use serde::{Deserialize, Serialize};

/// Top-level probe output for a URL
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeOutput {
    /// Display title (video title, or playlist title for playlists)
    pub title: Option<String>,
    /// Container extension of the selected stream
    pub ext: Option<String>,
    /// Thumbnails in ascending quality order
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
    /// Playlist entries; null items are failed extractions
    #[serde(default)]
    pub entries: Vec<Option<ProbeEntry>>,
}

/// One playlist entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeEntry {
    pub title: Option<String>,
    pub ext: Option<String>,
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
}

/// A single thumbnail variant
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Thumbnail {
    pub url: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real tool prints.
// If these fail, yt-dlp's JSON shape has changed and we need to update.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    /// Test parsing a minimal single-video probe
    #[test]
    fn test_parse_minimal_video() {
        let json = r#"{
            "title": "Artist - Song Name (Official Video)",
            "ext": "webm"
        }"#;

        let probe: ProbeOutput = serde_json::from_str(json).expect("Should parse minimal probe");

        assert_eq!(
            probe.title.as_deref(),
            Some("Artist - Song Name (Official Video)")
        );
        assert_eq!(probe.ext.as_deref(), Some("webm"));
        assert!(probe.thumbnails.is_empty());
        assert!(probe.entries.is_empty());
    }

    /// Test parsing a video with thumbnails
    #[test]
    fn test_parse_video_with_thumbnails() {
        let json = r#"{
            "title": "Some Song",
            "ext": "m4a",
            "thumbnails": [
                {"url": "https://i.example.com/default.jpg"},
                {"url": "https://i.example.com/maxres.jpg"}
            ]
        }"#;

        let probe: ProbeOutput = serde_json::from_str(json).expect("Should parse thumbnails");

        assert_eq!(probe.thumbnails.len(), 2);
        assert_eq!(
            probe.thumbnails[1].url.as_deref(),
            Some("https://i.example.com/maxres.jpg")
        );
    }

    /// Test parsing a playlist with a failed (null) entry
    #[test]
    fn test_parse_playlist_with_null_entry() {
        let json = r#"{
            "title": "My Playlist",
            "entries": [
                {"title": "First Track", "ext": "webm"},
                null,
                {"title": "Third Track", "ext": "m4a"}
            ]
        }"#;

        let probe: ProbeOutput = serde_json::from_str(json).expect("Should parse playlist");

        assert_eq!(probe.title.as_deref(), Some("My Playlist"));
        assert_eq!(probe.entries.len(), 3);
        assert!(probe.entries[1].is_none());
        assert_eq!(
            probe.entries[2].as_ref().unwrap().title.as_deref(),
            Some("Third Track")
        );
    }

    /// A null document means the tool resolved nothing
    #[test]
    fn test_parse_null_document() {
        let probe: Option<ProbeOutput> = serde_json::from_str("null").expect("null is valid JSON");
        assert!(probe.is_none());
    }
}
