//! Ollama chat API Data Transfer Objects
//!
//! These types match the request/response bodies of the Ollama `/api/chat`
//! endpoint. DO NOT use these types outside the normalizer module.
//!
//! API docs: https://github.com/ollama/ollama/blob/main/docs/api.md

use serde::{Deserialize, Serialize};

/// Chat completion request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier (e.g. "gemma3:4b")
    pub model: String,
    /// Conversation messages; we only ever send a single user message
    pub messages: Vec<ChatMessage>,
    /// Always false - the pipeline wants one complete response
    pub stream: bool,
}

/// One chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Chat completion response body (non-streaming)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub message: ChatMessage,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
