//! MusicBrainz recording-search Data Transfer Objects
//!
//! These types match EXACTLY what the MusicBrainz search API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the catalog module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API/Search
//!
//! We use the /recording search endpoint with a free-text query; only the
//! first recording and its first release are ever consulted.

use serde::{Deserialize, Serialize};

/// Recording search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Recordings in the API's own relevance order
    #[serde(default)]
    pub recordings: Vec<Recording>,
}

/// One matched recording
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recording {
    /// Releases this recording appears on
    #[serde(default)]
    pub releases: Vec<Release>,
}

/// Release (album/single/EP)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Release {
    /// Release title
    pub title: String,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub date: Option<String>,
}

/// Error response from MusicBrainz API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
