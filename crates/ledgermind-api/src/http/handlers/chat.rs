//! POST /api/chat - one conversational turn against the user's session.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::http::handlers::{require_json, require_non_empty};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Mutates the session: the user turn and the assistant reply are
/// committed together, or neither is (rollback on backend failure).
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let req = require_json(payload)?;
    require_non_empty(&req.user_id, "user_id")?;
    require_non_empty(&req.prompt, "prompt")?;

    let response = state.chat_service.respond(&req.user_id, &req.prompt).await?;

    Ok(Json(ChatResponse { response }))
}
