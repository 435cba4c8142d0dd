//! GenerationBackend trait definition.
//!
//! The single seam between the pipelines and the generative text service.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition); the concrete
//! Ollama client lives in ledgermind-infra.

use ledgermind_types::generation::{GenerationError, GenerationRequest};

/// Trait for the generative text backend.
///
/// One call, one answer: the backend receives the full ordered conversation
/// and returns the assistant's reply text. No retries are performed at this
/// layer or above -- a failed call is reported to the caller as-is.
pub trait GenerationBackend: Send + Sync {
    /// Send a generation request and return the reply content.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<String, GenerationError>> + Send;
}
