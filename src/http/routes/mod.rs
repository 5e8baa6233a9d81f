//! Request handlers.

pub mod assets;
pub mod tasks;

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// Error response shape shared by all handlers.
pub type ApiError = (StatusCode, Json<Value>);

/// 400 with a JSON error body.
pub(crate) fn bad_request(message: impl std::fmt::Display) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message.to_string() })))
}

/// 404 with a JSON error body.
pub(crate) fn not_found(message: impl std::fmt::Display) -> ApiError {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message.to_string() })))
}
