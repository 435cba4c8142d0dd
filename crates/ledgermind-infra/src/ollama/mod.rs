//! OllamaClient -- concrete [`GenerationBackend`] implementation for the
//! Ollama chat API.
//!
//! Sends non-streaming requests to `/api/chat` with the per-request
//! deadline the pipeline chose. A non-success status surfaces with the
//! status code and the raw response body so the failure is diagnosable
//! from the gateway's own error.

pub mod types;

use tracing::debug;

use ledgermind_core::backend::GenerationBackend;
use ledgermind_types::generation::{GenerationError, GenerationRequest};

use self::types::{OllamaChatRequest, OllamaChatResponse, OllamaMessage, OllamaOptions};

/// Ollama generation backend client.
///
/// Cheap to clone: the inner `reqwest::Client` is an `Arc` around its
/// connection pool, so each pipeline holds its own clone.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Create a new client against an Ollama base URL (no trailing path).
    ///
    /// The deadline is applied per request, not on the client, because the
    /// pipelines use different timeouts against the same backend.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// The model name sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn to_chat_request(&self, request: &GenerationRequest) -> OllamaChatRequest {
        let messages = request
            .messages
            .iter()
            .map(|m| OllamaMessage {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect();

        OllamaChatRequest {
            model: self.model.clone(),
            messages,
            stream: false,
            options: OllamaOptions {
                temperature: request.temperature,
            },
        }
    }
}

impl GenerationBackend for OllamaClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let body = self.to_chat_request(request);
        let url = self.url("/api/chat");
        debug!(
            model = %body.model,
            messages = body.messages.len(),
            temperature = request.temperature,
            "calling generation backend"
        );

        let response = self
            .client
            .post(&url)
            .timeout(request.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let chat: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Decode(e.to_string()))?;

        Ok(chat.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgermind_types::chat::ChatMessage;
    use std::time::Duration;

    fn make_client() -> OllamaClient {
        OllamaClient::new("http://ollama:11434", "gemma3")
    }

    #[test]
    fn test_url_join() {
        let client = make_client().with_base_url("http://localhost:11434");
        assert_eq!(client.url("/api/chat"), "http://localhost:11434/api/chat");
    }

    #[test]
    fn test_to_chat_request_maps_roles_and_temperature() {
        let client = make_client();
        let request = GenerationRequest {
            messages: vec![
                ChatMessage::system("Be strict"),
                ChatMessage::user("Hello"),
                ChatMessage::assistant("Hi"),
            ],
            temperature: 0.0,
            timeout: Duration::from_secs(30),
        };

        let wire = client.to_chat_request(&request);
        assert_eq!(wire.model, "gemma3");
        assert!(!wire.stream);
        assert_eq!(wire.options.temperature, 0.0);
        let roles: Vec<_> = wire.messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, ["system", "user", "assistant"]);
        assert_eq!(wire.messages[1].content, "Hello");
    }
}
