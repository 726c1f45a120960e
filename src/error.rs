//! Application error type and its HTTP mapping.
//!
//! Every failure is scoped to a single request. Expected outcomes
//! (bad input, unknown code) and transient ones (code space exhausted)
//! carry a fixed user-facing body; unexpected internal errors are logged
//! and surfaced generically.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::repositories::StorageError;

/// Message returned when a submitted URL fails validation.
pub const INVALID_URL_MESSAGE: &str = "Please provide a valid URL";

/// JSON body returned for every error response.
///
/// ```json
/// { "error": "Short URL not found", "message": "The requested short code does not exist" }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing URL in a shorten request.
    #[error("Invalid URL format: {message}")]
    Validation { message: String },

    /// Unknown short code or a reserved-looking path.
    #[error("Short URL not found: {code}")]
    NotFound { code: String },

    /// Every candidate code within the retry bound was unusable.
    #[error("Unable to generate unique short code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// Anything else. The message is logged, never returned to the client.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::GenerationExhausted { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Builds the client-facing body, dropping internal detail.
    pub fn to_error_body(&self) -> ErrorBody {
        match self {
            AppError::Validation { message } => ErrorBody {
                error: "Invalid URL format",
                message: message.clone(),
            },
            AppError::NotFound { .. } => ErrorBody {
                error: "Short URL not found",
                message: "The requested short code does not exist".to_string(),
            },
            AppError::GenerationExhausted { .. } => ErrorBody {
                error: "Unable to generate unique short code",
                message: "Please try again later".to_string(),
            },
            AppError::Internal { .. } => ErrorBody {
                error: "Internal server error",
                message: "Unable to process the request".to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal { message } => {
                tracing::error!(error = %message, "Request failed with internal error");
            }
            AppError::GenerationExhausted { attempts } => {
                tracing::error!(attempts, "Short code generation exhausted");
            }
            _ => {}
        }

        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| INVALID_URL_MESSAGE.to_string());

        AppError::bad_request(message)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        AppError::internal(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("abc123").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::GenerationExhausted { attempts: 10 }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_body() {
        let body = AppError::bad_request(INVALID_URL_MESSAGE).to_error_body();
        assert_eq!(body.error, "Invalid URL format");
        assert_eq!(body.message, INVALID_URL_MESSAGE);
    }

    #[test]
    fn test_internal_body_hides_detail() {
        let body = AppError::internal("lock poisoned in store").to_error_body();
        assert_eq!(body.error, "Internal server error");
        assert!(!body.message.contains("lock poisoned"));
    }

    #[test]
    fn test_storage_error_maps_to_internal() {
        let err: AppError = StorageError::DuplicateCode("abc123".to_string()).into();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_display_includes_context() {
        let err = AppError::not_found("zzzzzz");
        assert!(err.to_string().contains("zzzzzz"));
    }
}
