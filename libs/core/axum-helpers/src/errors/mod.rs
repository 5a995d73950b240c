pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::mongodb::IdError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error body returned by every endpoint.
///
/// ```json
/// { "error": "Failed to create transport", "message": "E11000 duplicate key error" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Short description of what failed
    pub error: String,
    /// Underlying error text, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Extra diagnostics such as an in-flight upload id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            details: None,
        }
    }
}

/// Application error type converted into an HTTP response at the handler boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// Client-caused binding failure, always 400 with the code's default message
    #[error("{}", .0.default_message())]
    Validation(ErrorCode),

    /// Store or storage failure, always 500
    #[error("{error}")]
    Internal {
        code: ErrorCode,
        error: String,
        message: Option<String>,
        details: Option<serde_json::Value>,
    },

    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    pub fn invalid_body() -> Self {
        AppError::Validation(ErrorCode::InvalidBody)
    }

    pub fn missing_id() -> Self {
        AppError::Validation(ErrorCode::MissingId)
    }

    pub fn invalid_id() -> Self {
        AppError::Validation(ErrorCode::InvalidId)
    }

    /// Read-path store failure: `{"error": <store message>}`
    pub fn store(message: impl Into<String>) -> Self {
        AppError::Internal {
            code: ErrorCode::StoreError,
            error: message.into(),
            message: None,
            details: None,
        }
    }

    /// Write-path store failure: `{"error": <summary>, "message": <store message>}`
    pub fn store_write(error: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Internal {
            code: ErrorCode::StoreError,
            error: error.into(),
            message: Some(message.into()),
            details: None,
        }
    }

    /// Object storage failure: `{"error": <summary>, "message": <storage message>}`
    pub fn storage(error: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Internal {
            code: ErrorCode::StorageError,
            error: error.into(),
            message: Some(message.into()),
            details: None,
        }
    }

    /// Attaches diagnostics to an internal error; other variants are returned unchanged.
    pub fn with_details(self, value: serde_json::Value) -> Self {
        match self {
            AppError::Internal {
                code,
                error,
                message,
                ..
            } => AppError::Internal {
                code,
                error,
                message,
                details: Some(value),
            },
            other => other,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(code) | AppError::Internal { code, .. } => *code,
            AppError::NotFound(_) => ErrorCode::NotFound,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<IdError> for AppError {
    fn from(err: IdError) -> Self {
        match err {
            IdError::Missing => AppError::missing_id(),
            IdError::Invalid => AppError::invalid_id(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let body = match self {
            AppError::Validation(code) => {
                tracing::debug!(error_code = code.code(), "{}", code.default_message());
                ErrorResponse::new(code.default_message())
            }
            AppError::Internal {
                code,
                error,
                message,
                details,
            } => {
                tracing::error!(
                    error_code = code.code(),
                    error_kind = code.as_str(),
                    message = message.as_deref().unwrap_or_default(),
                    details = ?details,
                    "{error}"
                );
                ErrorResponse {
                    error,
                    message,
                    details,
                }
            }
            AppError::NotFound(message) => {
                tracing::debug!(error_code = code.code(), "Not found: {message}");
                ErrorResponse {
                    error: code.default_message().to_string(),
                    message: Some(message),
                    details: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
