//! Error types for the Statuswatch HTTP API server.

use axum::response::IntoResponse;
use thiserror::Error;

/// Main error type for API operations.
///
/// The caller-visible body is always uniform JSON with an `error` key;
/// internal detail goes to the log only.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request source is not on the configured allow-list.
    #[error("Forbidden")]
    Forbidden,

    /// Request body was not parsable JSON.
    #[error("Invalid JSON")]
    InvalidJson,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Core Statuswatch error.
    #[error("Core error: {0}")]
    Core(#[from] statuswatch_core::Error),

    /// Any other unexpected failure.
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Convert to HTTP status code.
    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            ApiError::Forbidden => axum::http::StatusCode::FORBIDDEN,
            ApiError::InvalidJson => axum::http::StatusCode::BAD_REQUEST,
            ApiError::Io(_) | ApiError::Core(_) | ApiError::Internal(_) => {
                axum::http::StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Caller-visible message. Internal variants collapse to a generic
    /// line; detail stays in the log.
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Forbidden => "Forbidden",
            ApiError::InvalidJson => "Invalid JSON",
            ApiError::Io(_) | ApiError::Core(_) | ApiError::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("internal error: {}", self);
        }
        let body = serde_json::json!({ "error": self.public_message() });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn status_codes_match_error_taxonomy() {
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::InvalidJson.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_detail_is_not_caller_visible() {
        let err = ApiError::Internal("secret detail".to_string());
        assert_eq!(err.public_message(), "Internal server error");
    }
}
