//! Request and error types for the generation backend.
//!
//! These are the generic shapes the pipelines speak; the Ollama-specific
//! wire structs live in ledgermind-infra and are built from these.

use std::time::Duration;

use crate::chat::ChatMessage;

/// A single generation call: an ordered conversation, a sampling
/// temperature, and the deadline for this call.
///
/// Each pipeline sets its own temperature and timeout (categorization runs
/// deterministic and short, advice runs creative and long), so both travel
/// with the request rather than living on the client.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub timeout: Duration,
}

/// Errors from a generation backend call.
///
/// Label validation is never an error -- a successful backend answer outside
/// the allow-list is resolved to the default label by the categorizer.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Transport-level failure reaching the backend (includes timeouts).
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered with a non-success HTTP status.
    #[error("backend rejected request: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The backend answered 2xx but the body did not decode.
    #[error("malformed backend response: {0}")]
    Decode(String),
}
