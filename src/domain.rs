//! Internal domain models passed through the download pipeline.
//!
//! These types are OUR types - they don't change when external tools or APIs
//! change. yt-dlp output and MusicBrainz responses get converted into these
//! types via adapters.

/// Metadata resolved for a source URL by the probe pass (no download).
#[derive(Debug, Clone, Default)]
pub struct RawMediaInfo {
    /// Raw display title as reported by the extractor
    pub title: String,
    /// Container extension of the best audio stream (pre-transcode)
    pub ext: String,
    /// Thumbnail URLs in ascending quality order (largest last)
    pub thumbnails: Vec<String>,
}

impl RawMediaInfo {
    /// URL of the largest available thumbnail, if any.
    pub fn best_thumbnail(&self) -> Option<&str> {
        self.thumbnails.last().map(String::as_str)
    }
}

/// Best-guess (song, artist) pair produced by the title normalizer.
///
/// The artist may be empty when unknown. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackIdentity {
    pub song: String,
    pub artist: String,
}

impl TrackIdentity {
    pub fn new(song: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            song: song.into(),
            artist: artist.into(),
        }
    }

    /// Fallback identity when normalization degrades: the raw title as-is,
    /// with no artist.
    pub fn fallback(raw_title: &str) -> Self {
        Self {
            song: raw_title.to_string(),
            artist: String::new(),
        }
    }

    /// Display string used for output filenames: `"{song} ({artist})"`.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.song, self.artist)
    }
}

/// Album/year pair from the catalog, either field possibly empty when the
/// lookup failed or returned no match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogRecord {
    pub album: String,
    pub year: String,
}

impl CatalogRecord {
    pub fn is_empty(&self) -> bool {
        self.album.is_empty() && self.year.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_identity() {
        let identity = TrackIdentity::fallback("Some Raw Title");
        assert_eq!(identity.song, "Some Raw Title");
        assert!(identity.artist.is_empty());
    }

    #[test]
    fn test_display_name() {
        let identity = TrackIdentity::new("Song Name", "Artist");
        assert_eq!(identity.display_name(), "Song Name (Artist)");
    }

    #[test]
    fn test_best_thumbnail_is_last() {
        let info = RawMediaInfo {
            title: "t".to_string(),
            ext: "webm".to_string(),
            thumbnails: vec![
                "https://img.example.com/small.jpg".to_string(),
                "https://img.example.com/large.jpg".to_string(),
            ],
        };
        assert_eq!(
            info.best_thumbnail(),
            Some("https://img.example.com/large.jpg")
        );
    }

    #[test]
    fn test_best_thumbnail_empty() {
        let info = RawMediaInfo::default();
        assert!(info.best_thumbnail().is_none());
    }

    #[test]
    fn test_catalog_record_default_is_empty() {
        assert!(CatalogRecord::default().is_empty());
    }
}
