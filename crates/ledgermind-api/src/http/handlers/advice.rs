//! POST /api/advice - financial recommendations over a transaction dump.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::http::handlers::{require_json, require_non_empty};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub user_id: String,
    /// Opaque transaction dump, typically JSON; passed to the model verbatim.
    pub transactions: String,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub advice: String,
}

/// Stateless: no session is read or written.
pub async fn advice(
    State(state): State<AppState>,
    payload: Result<Json<AdviceRequest>, JsonRejection>,
) -> Result<Json<AdviceResponse>, AppError> {
    let req = require_json(payload)?;
    require_non_empty(&req.user_id, "user_id")?;
    require_non_empty(&req.transactions, "transactions")?;

    let advice = state.advisor.advise(&req.transactions).await?;

    Ok(Json(AdviceResponse { advice }))
}
