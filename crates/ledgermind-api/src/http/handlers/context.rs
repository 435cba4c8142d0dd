//! DELETE /api/context/{user_id} - destroy a user's session.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{json, Value};
use tracing::info;

use crate::state::AppState;

/// Clearing is idempotent: clearing an absent session is still "cleared".
pub async fn clear_context(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Value> {
    let dropped = state.sessions.len(&user_id);
    state.sessions.clear(&user_id);
    info!(user_id = %user_id, dropped, "session cleared");

    Json(json!({"status": "cleared"}))
}
