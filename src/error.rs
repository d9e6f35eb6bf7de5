//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
///
/// Every error is terminal for its request. Unknown access tokens are
/// deliberately NOT represented here: token-resolution misses degrade to
/// well-formed empty results instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid client credentials")]
    InvalidCredentials,

    #[error("Missing {0}")]
    MissingField(&'static str),

    #[error("Endpoint not found")]
    EndpointNotFound,

    // Server errors (5xx)
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // 401 Unauthorized
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),

            // 400 Bad Request
            AppError::MissingField(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            // 404 Not Found
            AppError::EndpointNotFound => (StatusCode::NOT_FOUND, self.to_string()),

            // 500 Internal Server Error - raw cause stays server-side
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Config(e) => {
                tracing::error!("Config error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ErrorResponse { error: message };

        (status, Json(body)).into_response()
    }
}
