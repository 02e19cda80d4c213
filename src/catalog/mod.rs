//! MusicBrainz catalog integration
//!
//! Looks up album and release year for a (song, artist) pair via the
//! recording search endpoint. Lookup is best-effort: the pipeline gets an
//! empty record instead of an error when anything goes wrong.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
mod adapter;
mod client;

pub use adapter::to_catalog_record;
pub use client::CatalogClient;

/// Errors from the metadata catalog collaborator.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Rate limited - try again later")]
    RateLimited,
}
