//! Core gateway logic: per-user conversational state and the three
//! generation pipelines (categorization, chat, advice).
//!
//! Everything here is generic over the [`backend::GenerationBackend`] trait
//! so this crate never depends on the concrete HTTP client in
//! ledgermind-infra, and tests can drive the pipelines with scripted
//! backends.

pub mod advice;
pub mod backend;
pub mod categorize;
pub mod chat;
pub mod session;
