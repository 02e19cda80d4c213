//! Title normalization via a language model.
//!
//! YouTube-style titles ("Artist - Song (Official Video) [4K]") are noisy.
//! The normalizer asks a local Ollama model to extract the most probable
//! song title and artist as strict JSON, then runs the response through the
//! fence-stripping parse adapter.
//!
//! Normalization never fails the pipeline: model unavailability, HTTP
//! errors, and non-JSON responses all degrade to the raw title with an
//! empty artist.

mod client;
mod dto;
pub mod parse;

pub use client::{NormalizeError, OllamaClient};

use crate::config::Config;
use crate::domain::TrackIdentity;

/// Title normalizer backed by an Ollama model.
pub struct TitleNormalizer {
    client: OllamaClient,
}

impl TitleNormalizer {
    /// Create a normalizer from the application config.
    pub fn new(config: &Config) -> Self {
        Self {
            client: OllamaClient::new(&config.model.endpoint, &config.model.name),
        }
    }

    /// Produce a best-guess (song, artist) pair for a raw title.
    pub async fn normalize(&self, raw_title: &str) -> TrackIdentity {
        let prompt = extraction_prompt(raw_title);

        match self.client.chat(&prompt).await {
            Ok(response) => parse::identity_from_response(raw_title, &response),
            Err(e) => {
                tracing::warn!("Title normalization unavailable ({}), keeping raw title", e);
                TrackIdentity::fallback(raw_title)
            }
        }
    }
}

/// Build the extraction prompt for a raw title.
fn extraction_prompt(raw_title: &str) -> String {
    format!(
        r#"You are a music metadata assistant.
Given the video title below, extract the most probable song title and artist.
Return strictly a JSON object like: {{ "title": "...", "artist": "..." }}

Video title: {raw_title}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_title_and_keys() {
        let prompt = extraction_prompt("Artist - Song (Official Video)");
        assert!(prompt.contains("Artist - Song (Official Video)"));
        assert!(prompt.contains("\"title\""));
        assert!(prompt.contains("\"artist\""));
    }

    #[tokio::test]
    async fn test_normalize_degrades_when_model_unreachable() {
        let normalizer = TitleNormalizer {
            client: OllamaClient::new("http://127.0.0.1:1", "gemma3:4b"),
        };
        let identity = normalizer.normalize("Raw Title").await;
        assert_eq!(identity, TrackIdentity::fallback("Raw Title"));
    }
}
