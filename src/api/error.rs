//! Unified API error handling.
//!
//! Every failure leaves the service as HTTP 200 with an `{"error": "..."}`
//! body. Clients inspect the key, not the status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failures a handler can surface to the client.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Anything the store reported, passed through as its message text.
    #[error("{0}")]
    Store(String),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "store operation failed");
        ApiError::Store(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!(error = %err, "stored value failed to decode");
        ApiError::Store(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Failures still answer 200; the `error` key is the signal.
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}
