//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses. The waitlist endpoint promises its callers a fixed
//! set of normalized bodies, so every variant renders as a flat
//! `{"error": ...}` payload; request ids and detail stay in the logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Email missing from the body or failed the shape check
    #[error("Invalid email")]
    InvalidEmail,

    /// Endpoint called with anything other than POST
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No upstream form id configured on the server
    #[error("Server misconfigured")]
    Misconfigured,

    /// Upstream rejected the relay or was unreachable
    #[error("Submission failed")]
    SubmissionFailed,

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::InvalidEmail => (StatusCode::BAD_REQUEST, "INVALID_EMAIL"),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED"),
            ApiError::Misconfigured => (StatusCode::INTERNAL_SERVER_ERROR, "MISCONFIGURED"),
            ApiError::SubmissionFailed => (StatusCode::BAD_GATEWAY, "UPSTREAM_FAILED"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        // Log the error
        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_match_contract() {
        assert_eq!(ApiError::InvalidEmail.to_string(), "Invalid email");
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Method not allowed");
        assert_eq!(ApiError::Misconfigured.to_string(), "Server misconfigured");
        assert_eq!(ApiError::SubmissionFailed.to_string(), "Submission failed");
    }
}
