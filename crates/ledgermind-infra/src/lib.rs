//! Infrastructure for Ledgermind: the concrete Ollama backend client and
//! environment-driven configuration.

pub mod config;
pub mod ollama;
