//! Cover art download.
//!
//! Fetches the source's thumbnail and persists it as a `.jpg` sidecar next
//! to the audio file, named after the same sanitized identity. No
//! content-type validation is performed; JPEG is assumed for both the file
//! extension and the embedded MIME type downstream.
//!
//! Fetching is best-effort: an absent URL or any network/IO failure yields
//! `None`, never an error.

use std::path::PathBuf;

use crate::domain::TrackIdentity;
use crate::sanitize::sanitize_filename;

/// Errors from the image host collaborator. Internal to this module; the
/// public API degrades to `None`.
#[derive(Debug, thiserror::Error)]
enum CoverError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Cover fetcher writing sidecar images into the output directory.
pub struct CoverFetcher {
    http_client: reqwest::Client,
    output_dir: PathBuf,
}

impl CoverFetcher {
    /// Create a fetcher writing into the given output directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            output_dir: output_dir.into(),
        }
    }

    /// Download the cover image and return the sidecar path.
    ///
    /// An absent URL returns `None` without any I/O. Failures are logged
    /// and degrade to `None`.
    pub async fn fetch_cover(
        &self,
        url: Option<&str>,
        identity: &TrackIdentity,
    ) -> Option<PathBuf> {
        let url = url?;

        match self.download_to_sidecar(url, identity).await {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Failed to download cover art: {}", e);
                None
            }
        }
    }

    async fn download_to_sidecar(
        &self,
        url: &str,
        identity: &TrackIdentity,
    ) -> Result<PathBuf, CoverError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| CoverError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoverError::Status(status));
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| CoverError::Network(e.to_string()))?;

        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.sidecar_path(identity);
        std::fs::write(&path, &data)?;

        Ok(path)
    }

    /// Sidecar path for an identity: `sanitize("{song} ({artist})") + ".jpg"`.
    pub fn sidecar_path(&self, identity: &TrackIdentity) -> PathBuf {
        self.output_dir
            .join(sanitize_filename(&identity.display_name()) + ".jpg")
    }
}
