//! API error types with HTTP response mapping.
//!
//! Every error body has the shape `{"detail": "<message>"}`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use registry::RegistryError;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Consultation schedule not found";
pub const CONFLICT_MESSAGE: &str = "Consultation schedule with this ID already exists";

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Registry operation failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// Request body was missing, malformed, or did not match the record shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
    /// Path id was not an integer.
    #[error("Invalid path parameter: {0}")]
    InvalidPath(#[from] PathRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Registry(err) => registry_error_to_response(&err),
            ApiError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected request body");
                (rejection.status(), rejection.body_text())
            }
            ApiError::InvalidPath(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected path parameter");
                (rejection.status(), rejection.body_text())
            }
        };

        let body = serde_json::json!({ "detail": message });
        (status, axum::Json(body)).into_response()
    }
}

fn registry_error_to_response(err: &RegistryError) -> (StatusCode, String) {
    match err {
        RegistryError::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string()),
        RegistryError::Conflict(_) => (StatusCode::BAD_REQUEST, CONFLICT_MESSAGE.to_string()),
    }
}
