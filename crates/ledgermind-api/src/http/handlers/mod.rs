//! HTTP handlers for the gateway endpoints.

pub mod advice;
pub mod categorize;
pub mod chat;
pub mod context;

use axum::Json;
use axum::extract::rejection::JsonRejection;

use crate::http::error::AppError;

/// Unwrap a JSON body extraction, mapping any rejection (syntax errors,
/// missing fields, wrong content type) to a 400.
pub(crate) fn require_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(AppError::InvalidRequest(rejection.body_text())),
    }
}

/// Reject empty required string fields, mirroring the upstream contract.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidRequest(format!(
            "field '{field}' must not be empty"
        )));
    }
    Ok(())
}
