//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and rate limits to 1 req/sec.

use super::{CatalogError, adapter, dto};
use crate::domain::CatalogRecord;

/// MusicBrainz API client
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
}

/// User agent string - MusicBrainz requires this
const USER_AGENT: &str = concat!(
    "TuneGrab/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/tunegrab)"
);

impl CatalogClient {
    /// Create a new client
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://musicbrainz.org/ws/2".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Search recordings by free-text query and return the album/year of the
    /// top match's first release.
    pub async fn search(&self, song: &str, artist: &str) -> Result<CatalogRecord, CatalogError> {
        let response = self.send_search_request(song, artist).await?;
        Ok(adapter::to_catalog_record(response))
    }

    /// Degrading wrapper around [`search`](Self::search): any failure is
    /// logged and yields an empty record. Lookup is best-effort and never
    /// raises to the caller.
    pub async fn lookup(&self, song: &str, artist: &str) -> CatalogRecord {
        match self.search(song, artist).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Catalog lookup failed: {}", e);
                CatalogRecord::default()
            }
        }
    }

    /// Send the HTTP request and parse the response
    async fn send_search_request(
        &self,
        song: &str,
        artist: &str,
    ) -> Result<dto::SearchResponse, CatalogError> {
        let query = format!("{} {}", song, artist);
        let url = format!(
            "{}/recording/?query={}&fmt=json",
            self.base_url,
            urlencoding::encode(query.trim())
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited);
        }

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(CatalogError::Api(error.error));
            }
            return Err(CatalogError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
