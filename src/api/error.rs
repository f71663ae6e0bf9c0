//! API Error Types
//!
//! Error types for the JSON endpoints and their conversion to HTTP
//! responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::feed::FeedError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// The upstream feed could not be loaded
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Feed failures are logged where the feed is loaded
    pub fn logged_at_source(&self) -> bool {
        matches!(self, ApiError::Feed(_))
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Feed(e) => (
                StatusCode::BAD_GATEWAY,
                "FEED_UNAVAILABLE",
                e.user_message().to_string(),
            ),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                self.to_string(),
            ),
            ApiError::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "IO_ERROR",
                self.to_string(),
            ),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        if self.logged_at_source() {
            tracing::debug!(request_id = %request_id, error_code = %code, "API error occurred");
        } else {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API error occurred"
            );
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
