//! In-memory session registry for per-user conversation history.
//!
//! Sessions are created lazily on first append, bounded to
//! [`WINDOW_SIZE`] messages (oldest evicted first), and destroyed only by
//! an explicit [`SessionStore::clear`]. Nothing survives a process restart.
//!
//! The registry is a [`DashMap`], so operations for different users never
//! contend and operations for the same user serialize on that session's
//! shard lock. Every operation is O(window) and returns before any network
//! call happens; the chat pipeline works on a [`SessionStore::snapshot`]
//! copy while talking to the backend. This does NOT serialize the whole
//! append -> call -> commit sequence per user: two concurrent chat requests
//! for the same user can interleave, and a rollback can then remove the
//! other request's message. See the interleaving test below.

use dashmap::DashMap;
use ledgermind_types::chat::ChatMessage;

/// Maximum number of messages retained per session.
pub const WINDOW_SIZE: usize = 10;

/// Registry of per-user message histories.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, Vec<ChatMessage>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the user's session, creating the
    /// session if absent. Call [`SessionStore::trim`] afterwards to restore
    /// the length invariant.
    pub fn append(&self, user_id: &str, message: ChatMessage) {
        self.sessions
            .entry(user_id.to_string())
            .or_default()
            .push(message);
    }

    /// Drop oldest messages until the session holds at most
    /// [`WINDOW_SIZE`]. No-op for absent sessions.
    pub fn trim(&self, user_id: &str) {
        if let Some(mut history) = self.sessions.get_mut(user_id) {
            if history.len() > WINDOW_SIZE {
                let excess = history.len() - WINDOW_SIZE;
                history.drain(..excess);
            }
        }
    }

    /// An independent copy of the user's current history, oldest first.
    ///
    /// The copy is safe to hold across the backend network call; no lock
    /// is retained once this returns.
    pub fn snapshot(&self, user_id: &str) -> Vec<ChatMessage> {
        self.sessions
            .get(user_id)
            .map(|history| history.clone())
            .unwrap_or_default()
    }

    /// Remove exactly the most recently appended message, undoing an
    /// uncommitted user turn. No-op if the history is empty or absent.
    pub fn rollback_last(&self, user_id: &str) {
        if let Some(mut history) = self.sessions.get_mut(user_id) {
            history.pop();
        }
    }

    /// Destroy the user's session entirely. A subsequent snapshot is empty.
    pub fn clear(&self, user_id: &str) {
        self.sessions.remove(user_id);
    }

    /// Number of messages currently stored for the user (0 when absent).
    pub fn len(&self, user_id: &str) -> usize {
        self.sessions
            .get(user_id)
            .map(|history| history.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self, user_id: &str) -> bool {
        self.len(user_id) == 0
    }
}
