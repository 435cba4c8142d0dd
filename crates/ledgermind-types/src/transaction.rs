//! Transaction wire type received from the manager service.

use serde::{Deserialize, Serialize};

/// A single financial transaction as it arrives over the wire.
///
/// `date` is a unix timestamp and `amount` is in minor currency units; the
/// gateway never interprets either, it only renders them into prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub date: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: i64,
    pub description: String,
}
