//! Advice pipeline: single-turn financial recommendations over a
//! caller-supplied transaction dump.
//!
//! No session state and no output validation -- the reply goes back to the
//! caller as-is. Generation runs longer and more creative than the other
//! pipelines, so the deadline is wider.

use std::time::Duration;

use ledgermind_types::chat::ChatMessage;
use ledgermind_types::generation::{GenerationError, GenerationRequest};

use crate::backend::GenerationBackend;

/// Recommendations benefit from some variety between requests.
const ADVICE_TEMPERATURE: f64 = 0.8;

/// Per-call deadline for advice generations. Summarizing a full
/// transaction history takes the model far longer than a chat turn.
const ADVICE_TIMEOUT: Duration = Duration::from_secs(120);

/// Tone, format and language for the advice reply. The answer is rendered
/// verbatim in a Russian-language UI, so the model must answer in Russian
/// and must not parrot the raw input back.
const ADVICE_SYSTEM_PROMPT: &str = "You are a personal finance advisor. \
You will receive the user's transaction history as raw data. \
Analyze their spending and reply in Russian with 3-5 short, practical, friendly recommendations. \
Do NOT repeat or quote the raw transaction data in your answer.";

/// Single-turn advice generator.
pub struct Advisor<B: GenerationBackend> {
    backend: B,
}

impl<B: GenerationBackend> Advisor<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Generate advice over the transaction dump, returned as-is.
    pub async fn advise(&self, transactions: &str) -> Result<String, GenerationError> {
        let request = GenerationRequest {
            messages: vec![
                ChatMessage::system(ADVICE_SYSTEM_PROMPT),
                ChatMessage::user(transactions),
            ],
            temperature: ADVICE_TEMPERATURE,
            timeout: ADVICE_TIMEOUT,
        };

        self.backend.generate(&request).await
    }
}
