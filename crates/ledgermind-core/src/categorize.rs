//! Categorization pipeline: deterministic single-turn classification of a
//! transaction into the closed label set.
//!
//! The backend is instructed to answer with one bare word; whatever comes
//! back is cleaned, then resolved case-insensitively against the
//! allow-list. An out-of-set answer is policy, not an error -- it resolves
//! to the default label and is logged. Backend failures stay hard errors.

use std::time::Duration;

use tracing::warn;

use ledgermind_types::category::{ALLOWED_CATEGORIES, DEFAULT_CATEGORY, canonical_category};
use ledgermind_types::chat::ChatMessage;
use ledgermind_types::generation::{GenerationError, GenerationRequest};
use ledgermind_types::transaction::Transaction;

use crate::backend::GenerationBackend;

/// Classification runs fully deterministic.
const CATEGORIZE_TEMPERATURE: f64 = 0.0;

/// Per-call deadline for classification generations.
const CATEGORIZE_TIMEOUT: Duration = Duration::from_secs(30);

/// Single-turn transaction classifier.
pub struct Categorizer<B: GenerationBackend> {
    backend: B,
}

impl<B: GenerationBackend> Categorizer<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Classify one transaction, always returning a label from the
    /// allow-list when the backend call itself succeeds.
    pub async fn categorize(
        &self,
        transaction: &Transaction,
    ) -> Result<String, GenerationError> {
        let request = GenerationRequest {
            messages: vec![
                ChatMessage::system(system_prompt()),
                ChatMessage::user(transaction_prompt(transaction)),
            ],
            temperature: CATEGORIZE_TEMPERATURE,
            timeout: CATEGORIZE_TIMEOUT,
        };

        let answer = self.backend.generate(&request).await?;
        let cleaned = clean_label(&answer);

        match canonical_category(&cleaned) {
            Some(canonical) => Ok(canonical.to_string()),
            None => {
                warn!(answer = %cleaned, "model answered outside the allow-list, falling back to {DEFAULT_CATEGORY}");
                Ok(DEFAULT_CATEGORY.to_string())
            }
        }
    }
}

/// The fixed classification instruction naming the allow-list.
fn system_prompt() -> String {
    let categories = ALLOWED_CATEGORIES.join(", ");
    format!(
        "You are a strict data classification machine. \
You will receive transaction details. \
You must return ONLY one word: the category name from the list below that best fits the transaction.\n\
Allowed categories: [{categories}].\n\
Do NOT write \"The category is...\", do NOT add punctuation. Return ONLY the category word.\n\
If you cannot decide, return \"{DEFAULT_CATEGORY}\"."
    )
}

/// One-line transaction summary for the model.
fn transaction_prompt(transaction: &Transaction) -> String {
    format!(
        "Transaction: {}, Amount: {}, Type: {}",
        transaction.description, transaction.amount, transaction.kind
    )
}

/// Normalize a raw model answer down to a candidate label: strip
/// surrounding whitespace, periods and quotes, then keep only the first
/// whitespace-delimited token. An empty answer yields an empty string.
fn clean_label(raw: &str) -> String {
    let stripped = raw
        .trim()
        .trim_matches('.')
        .trim_matches('"')
        .trim_matches('\'');
    stripped
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBackend(Result<&'static str, GenerationError>);

    impl GenerationBackend for FixedBackend {
        async fn generate(
            &self,
            _request: &GenerationRequest,
        ) -> Result<String, GenerationError> {
            match &self.0 {
                Ok(reply) => Ok(reply.to_string()),
                Err(GenerationError::Unavailable(msg)) => {
                    Err(GenerationError::Unavailable(msg.clone()))
                }
                Err(GenerationError::Rejected { status, body }) => Err(GenerationError::Rejected {
                    status: *status,
                    body: body.clone(),
                }),
                Err(GenerationError::Decode(msg)) => Err(GenerationError::Decode(msg.clone())),
            }
        }
    }

    /// Backend that records the request it was given.
    struct CapturingBackend {
        seen: std::sync::Mutex<Option<GenerationRequest>>,
    }

    impl GenerationBackend for &CapturingBackend {
        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<String, GenerationError> {
            *self.seen.lock().unwrap() = Some(request.clone());
            Ok("Food".to_string())
        }
    }

    fn coffee() -> Transaction {
        Transaction {
            date: 1_700_000_000,
            kind: "Списание".to_string(),
            amount: 350,
            description: "Starbucks coffee".to_string(),
        }
    }

    // Scenario: the backend answers " Food. "; the cleaned token matches
    // the allow-list and the canonical label comes back.
    #[tokio::test]
    async fn test_noisy_answer_resolves_to_canonical_label() {
        let categorizer = Categorizer::new(FixedBackend(Ok(" Food. ")));
        let label = categorizer.categorize(&coffee()).await.unwrap();
        assert_eq!(label, "Food");
    }

    // Scenario: the backend rambles; the first token matches nothing and
    // the default label substitutes without an error.
    #[tokio::test]
    async fn test_rambling_answer_falls_back_to_default() {
        let categorizer = Categorizer::new(FixedBackend(Ok("I think this is food")));
        let label = categorizer.categorize(&coffee()).await.unwrap();
        assert_eq!(label, "Misc");
    }

    #[tokio::test]
    async fn test_lowercase_answer_returns_canonical_casing() {
        let categorizer = Categorizer::new(FixedBackend(Ok("restaurants")));
        let label = categorizer.categorize(&coffee()).await.unwrap();
        assert_eq!(label, "Restaurants");
    }

    #[tokio::test]
    async fn test_empty_answer_falls_back_to_default() {
        let categorizer = Categorizer::new(FixedBackend(Ok("   ")));
        let label = categorizer.categorize(&coffee()).await.unwrap();
        assert_eq!(label, "Misc");
    }

    #[tokio::test]
    async fn test_backend_failure_is_a_hard_error() {
        let categorizer = Categorizer::new(FixedBackend(Err(GenerationError::Rejected {
            status: 503,
            body: "overloaded".to_string(),
        })));
        let err = categorizer.categorize(&coffee()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Rejected { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_request_shape_is_deterministic_two_turn() {
        let backend = CapturingBackend {
            seen: std::sync::Mutex::new(None),
        };
        let categorizer = Categorizer::new(&backend);
        categorizer.categorize(&coffee()).await.unwrap();

        let request = backend.seen.lock().unwrap().take().unwrap();
        assert_eq!(request.temperature, 0.0);
        assert_eq!(request.messages.len(), 2);
        assert!(request.messages[0].content.contains("Allowed categories"));
        assert!(request.messages[0].content.contains("Transport"));
        assert_eq!(
            request.messages[1].content,
            "Transaction: Starbucks coffee, Amount: 350, Type: Списание"
        );
    }

    #[test]
    fn test_clean_label_strips_quotes_and_periods() {
        assert_eq!(clean_label("\"Food\""), "Food");
        assert_eq!(clean_label("'Transport'"), "Transport");
        assert_eq!(clean_label("Salary."), "Salary");
        assert_eq!(clean_label("  Shopping.  "), "Shopping");
    }

    #[test]
    fn test_clean_label_keeps_first_token_only() {
        assert_eq!(clean_label("Food category"), "Food");
        assert_eq!(clean_label("The category is Food"), "The");
    }

    #[test]
    fn test_clean_label_empty_input() {
        assert_eq!(clean_label(""), "");
        assert_eq!(clean_label(" .\"' "), "");
    }
}
