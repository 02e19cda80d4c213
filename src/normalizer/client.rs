//! Ollama HTTP client
//!
//! Talks to a locally running Ollama instance. No authentication, no
//! streaming - one prompt in, one complete text response out.

use super::dto;

/// Errors from the language-model collaborator.
///
/// These never escape the normalizer: every failure degrades to the
/// fallback identity at the call site.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Model API error: {0}")]
    Api(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Ollama API client
pub struct OllamaClient {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Create a new client for the given endpoint and model
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Send a single user message and return the model's raw text response
    pub async fn chat(&self, prompt: &str) -> Result<String, NormalizeError> {
        let url = format!("{}/api/chat", self.base_url);

        let request = dto::ChatRequest {
            model: self.model.clone(),
            messages: vec![dto::ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            stream: false,
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| NormalizeError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NormalizeError::Api(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .json::<dto::ChatResponse>()
            .await
            .map_err(|e| NormalizeError::Parse(e.to_string()))?;

        Ok(body.message.content)
    }

    /// Check whether the endpoint responds at all (for diagnostics)
    pub async fn is_reachable(&self) -> bool {
        self.http_client
            .get(&self.base_url)
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }
}
