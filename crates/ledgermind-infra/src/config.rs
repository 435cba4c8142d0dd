//! Gateway configuration read from the environment.
//!
//! Three knobs, each with the deployment default: the Ollama base URL, the
//! model name, and the listening port. The context window size and the
//! category allow-list are compile-time constants and deliberately not
//! configurable here.

/// Runtime configuration for the gateway process.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the Ollama instance (no trailing path).
    pub backend_url: String,
    /// Model name passed in every generation request.
    pub model: String,
    /// TCP port the HTTP surface listens on.
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://ollama:11434".to_string(),
            model: "gemma3".to_string(),
            port: 8082,
        }
    }
}

impl GatewayConfig {
    /// Read configuration from `OLLAMA_URL`, `MODEL_NAME` and `PORT`,
    /// falling back to the defaults for anything unset. An unparsable
    /// `PORT` logs a warning and falls back rather than aborting startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: env_or("OLLAMA_URL", &defaults.backend_url),
            model: env_or("MODEL_NAME", &defaults.model),
            port: parse_port(std::env::var("PORT").ok(), defaults.port),
        }
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| fallback.to_string())
}

fn parse_port(raw: Option<String>, fallback: u16) -> u16 {
    match raw {
        None => fallback,
        Some(value) => match value.parse() {
            Ok(port) => port,
            Err(_) => {
                tracing::warn!(value = %value, "PORT is not a valid port number, using {fallback}");
                fallback
            }
        },
    }
}
