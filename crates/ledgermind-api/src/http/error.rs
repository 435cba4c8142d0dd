//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use ledgermind_types::generation::GenerationError;

/// Application-level error that maps to HTTP responses.
///
/// Malformed requests are the caller's fault (400); everything the
/// generation backend does wrong is a 500 with diagnostic detail. Label
/// mismatches never reach this type -- the categorizer resolves them.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing request fields.
    InvalidRequest(String),
    /// The generation backend failed (transport, status, or decode).
    Generation(GenerationError),
}

impl From<GenerationError> for AppError {
    fn from(e: GenerationError) -> Self {
        AppError::Generation(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "invalid request".to_string(), msg)
            }
            AppError::Generation(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AI engine error".to_string(),
                e.to_string(),
            ),
        };

        let body = json!({
            "error": error,
            "details": details,
        });

        (status, axum::Json(body)).into_response()
    }
}
