//! Ollama chat API wire types.
//!
//! These are Ollama-specific request/response structures for HTTP
//! communication with `/api/chat`. They are NOT the generic generation
//! types from ledgermind-types -- those are backend-agnostic.

use serde::{Deserialize, Serialize};

/// Request body for the Ollama chat endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OllamaChatRequest {
    pub model: String,
    pub messages: Vec<OllamaMessage>,
    pub stream: bool,
    pub options: OllamaOptions,
}

/// Sampling options. Temperature is the only knob the gateway sets.
#[derive(Debug, Clone, Serialize)]
pub struct OllamaOptions {
    pub temperature: f64,
}

/// A single message on the Ollama wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaMessage {
    pub role: String,
    pub content: String,
}

/// Non-streaming response from the Ollama chat endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaChatResponse {
    pub message: OllamaMessage,
    pub done: bool,
}
