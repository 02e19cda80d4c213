//! Trait definitions for the pipeline's external collaborators.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations and run the whole pipeline
//! without network access or installed tools.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::catalog::CatalogClient;
use crate::cover::CoverFetcher;
use crate::domain::{CatalogRecord, RawMediaInfo, TrackIdentity};
use crate::fetcher::{FetchError, MediaFetcher};
use crate::normalizer::TitleNormalizer;

/// Media extraction collaborator: probe metadata, then download.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Resolve metadata for a URL without downloading.
    async fn probe(&self, url: &str) -> Result<RawMediaInfo, FetchError>;

    /// Download and transcode, naming the output after `name`.
    async fn materialize(&self, url: &str, name: &str) -> Result<PathBuf, FetchError>;
}

/// Language-model collaborator turning raw titles into identities.
#[async_trait]
pub trait TitleSource: Send + Sync {
    /// Best-guess (song, artist) for a raw title; total, never fails.
    async fn normalize(&self, raw_title: &str) -> TrackIdentity;
}

/// Metadata catalog collaborator.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Best-effort album/year lookup; empty fields on failure.
    async fn lookup(&self, song: &str, artist: &str) -> CatalogRecord;
}

/// Image host collaborator.
#[async_trait]
pub trait CoverSource: Send + Sync {
    /// Download a cover to a sidecar file; `None` on absent URL or failure.
    async fn fetch_cover(&self, url: Option<&str>, identity: &TrackIdentity)
    -> Option<PathBuf>;
}

// Implement traits for real clients

#[async_trait]
impl MediaSource for MediaFetcher {
    async fn probe(&self, url: &str) -> Result<RawMediaInfo, FetchError> {
        MediaFetcher::probe(self, url)
    }

    async fn materialize(&self, url: &str, name: &str) -> Result<PathBuf, FetchError> {
        MediaFetcher::materialize(self, url, name)
    }
}

#[async_trait]
impl TitleSource for TitleNormalizer {
    async fn normalize(&self, raw_title: &str) -> TrackIdentity {
        TitleNormalizer::normalize(self, raw_title).await
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn lookup(&self, song: &str, artist: &str) -> CatalogRecord {
        CatalogClient::lookup(self, song, artist).await
    }
}

#[async_trait]
impl CoverSource for CoverFetcher {
    async fn fetch_cover(
        &self,
        url: Option<&str>,
        identity: &TrackIdentity,
    ) -> Option<PathBuf> {
        CoverFetcher::fetch_cover(self, url, identity).await
    }
}
