//! POST /api/categorize - classify one transaction into the allow-list.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::info;

use ledgermind_types::transaction::Transaction;

use crate::http::error::AppError;
use crate::http::handlers::{require_json, require_non_empty};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    pub user_id: String,
    pub transaction: Transaction,
}

#[derive(Debug, Serialize)]
pub struct CategorizeResponse {
    pub kategoria: String,
}

/// Deterministic, stateless classification; backend failures are 500s,
/// out-of-set answers are resolved to the default label upstream of here.
pub async fn categorize(
    State(state): State<AppState>,
    payload: Result<Json<CategorizeRequest>, JsonRejection>,
) -> Result<Json<CategorizeResponse>, AppError> {
    let req = require_json(payload)?;
    require_non_empty(&req.user_id, "user_id")?;

    let kategoria = state.categorizer.categorize(&req.transaction).await?;
    info!(user_id = %req.user_id, kategoria = %kategoria, "transaction categorized");

    Ok(Json(CategorizeResponse { kategoria }))
}
