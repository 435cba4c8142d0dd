//! Chat pipeline: stateful conversation against the generation backend.
//!
//! Per request: append the prompt as a user turn, trim, snapshot, call the
//! backend with the snapshot (no store lock held), then either commit the
//! assistant reply or roll the user turn back. A session therefore never
//! contains a user turn with no paired assistant turn, except during the
//! open window of a single in-flight request.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use ledgermind_types::chat::ChatMessage;
use ledgermind_types::generation::{GenerationError, GenerationRequest};

use crate::backend::GenerationBackend;
use crate::session::SessionStore;

/// Sampling temperature for conversational replies.
const CHAT_TEMPERATURE: f64 = 0.7;

/// Per-call deadline for chat generations.
const CHAT_TIMEOUT: Duration = Duration::from_secs(30);

/// Orchestrates the append -> call -> commit-or-rollback sequence.
///
/// Generic over [`GenerationBackend`] so tests can script the backend.
/// The store is shared with the clear endpoint, which operates on it
/// directly.
pub struct ChatService<B: GenerationBackend> {
    backend: B,
    store: Arc<SessionStore>,
}

impl<B: GenerationBackend> ChatService<B> {
    pub fn new(backend: B, store: Arc<SessionStore>) -> Self {
        Self { backend, store }
    }

    /// Access the shared session store.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Run one chat turn for a user and return the assistant's reply.
    ///
    /// On any backend failure the just-appended user turn is rolled back so
    /// the stored history reflects only committed turns, and the error is
    /// surfaced unchanged. No retries.
    ///
    /// Concurrent calls for the same user can interleave their store
    /// operations; this is an accepted limitation, not handled here.
    pub async fn respond(
        &self,
        user_id: &str,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        self.store.append(user_id, ChatMessage::user(prompt));
        self.store.trim(user_id);

        let history = self.store.snapshot(user_id);
        debug!(user_id, history_len = history.len(), "chat turn started");

        let request = GenerationRequest {
            messages: history,
            temperature: CHAT_TEMPERATURE,
            timeout: CHAT_TIMEOUT,
        };

        match self.backend.generate(&request).await {
            Ok(reply) => {
                self.store.append(user_id, ChatMessage::assistant(&reply));
                self.store.trim(user_id);
                Ok(reply)
            }
            Err(err) => {
                warn!(user_id, error = %err, "chat generation failed, rolling back user turn");
                self.store.rollback_last(user_id);
                Err(err)
            }
        }
    }
}
