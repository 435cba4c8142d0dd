//! Application state wiring the pipelines together.
//!
//! AppState pins the generic core services to the concrete Ollama backend
//! and shares one session store between the chat pipeline and the clear
//! endpoint.

use std::sync::Arc;

use ledgermind_core::advice::Advisor;
use ledgermind_core::categorize::Categorizer;
use ledgermind_core::chat::ChatService;
use ledgermind_core::session::SessionStore;
use ledgermind_infra::config::GatewayConfig;
use ledgermind_infra::ollama::OllamaClient;

/// Concrete type aliases for the service generics pinned to the Ollama client.
pub type ConcreteChatService = ChatService<OllamaClient>;
pub type ConcreteCategorizer = Categorizer<OllamaClient>;
pub type ConcreteAdvisor = Advisor<OllamaClient>;

/// Shared application state holding the three pipelines and the store.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub categorizer: Arc<ConcreteCategorizer>,
    pub advisor: Arc<ConcreteAdvisor>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Wire the pipelines against the configured backend.
    pub fn init(config: &GatewayConfig) -> Self {
        let sessions = Arc::new(SessionStore::new());
        let backend = OllamaClient::new(&config.backend_url, &config.model);

        Self {
            chat_service: Arc::new(ChatService::new(backend.clone(), Arc::clone(&sessions))),
            categorizer: Arc::new(Categorizer::new(backend.clone())),
            advisor: Arc::new(Advisor::new(backend)),
            sessions,
        }
    }
}
