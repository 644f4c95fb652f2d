use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::warn;

use crate::forwarder::ForwardError;

/// Custom error type for the application
#[derive(Debug)]
pub enum AppError {
    /// The webhook call failed on a route that surfaces failures as HTTP errors
    Upstream(String),
    /// Request carried a non-JSON `Content-Type`
    UnsupportedMediaType(String),
    /// Body is not a JSON object
    InvalidPayload(String),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            // The forwarder already logged the failure
            AppError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::UnsupportedMediaType(msg) => {
                warn!("Rejected request: {}", msg);
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg)
            }
            AppError::InvalidPayload(msg) => {
                warn!("Rejected request body: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<ForwardError> for AppError {
    fn from(err: ForwardError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

/// Result type for application handlers
pub type AppResult<T> = Result<T, AppError>;
