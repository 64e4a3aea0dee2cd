//! HTTP mapping of the engine's error taxonomy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::error::Error;

/// Structured error payload returned to clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

fn status_and_code(err: &Error) -> (StatusCode, &'static str) {
    match err {
        Error::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        Error::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
        Error::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
        Error::StorageUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "storage_unavailable"),
        Error::GenerationFailed(_) => (StatusCode::BAD_GATEWAY, "generation_failed"),
        Error::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = status_and_code(&self);
        if status.is_server_error() {
            error!(error = %self, code, "request failed");
        }

        let body = ErrorBody {
            error: code,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
