//! Shared domain types for Ledgermind.
//!
//! Everything the gateway crates agree on lives here: chat messages and
//! roles, transactions, the category allow-list, and the request/error
//! types for the generation backend. This crate has no async runtime and
//! no I/O -- it is pure data.

pub mod category;
pub mod chat;
pub mod generation;
pub mod transaction;
