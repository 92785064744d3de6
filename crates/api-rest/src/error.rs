//! HTTP error handling and conversion.
//!
//! Errors are rendered as short plain-text bodies; the store client only
//! inspects the status code.

use appstore_mock_domain::CollectError;
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, warn};

/// API-specific error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matches the method and path
    #[error("Not Found")]
    NotFound,

    /// Collect body is not a JSON object
    #[error(transparent)]
    InvalidBody(#[from] CollectError),

    /// Request body exceeds the configured limit
    #[error("Payload Too Large")]
    PayloadTooLarge,

    /// Request body could not be read
    #[error("Bad Request: {0}")]
    BadRequest(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidBody(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    /// Get error code for logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InvalidBody(err) => err.error_code(),
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::BadRequest(_) => "BAD_REQUEST",
        }
    }

    /// Body text sent to the client
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::NotFound => "Not Found",
            Self::InvalidBody(_) => "Invalid JSON",
            Self::PayloadTooLarge => "Payload Too Large",
            Self::BadRequest(_) => "Bad Request",
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            Self::BadRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::NotFound => debug!(error_code = self.error_code(), "No matching route"),
            _ => warn!(
                error_code = self.error_code(),
                message = %self,
                "Request rejected"
            ),
        }

        (status, self.public_message()).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
