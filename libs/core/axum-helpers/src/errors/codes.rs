//! Error codes attached to logged API errors.
//!
//! Response bodies carry only the human-readable text; the numeric code and
//! identifier go to the logs for correlation.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidId;
//! assert_eq!(code.as_str(), "INVALID_ID");
//! assert_eq!(code.code(), 1003);
//! assert_eq!(code.default_message(), "invalid id");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body could not be bound to the expected payload
    InvalidBody,

    /// Path identifier is absent or empty
    MissingId,

    /// Path identifier is not a valid document key
    InvalidId,

    /// No route matched the request
    NotFound,

    // Server errors (2000-2999)
    /// Document store operation failed
    StoreError,

    /// Object storage operation failed
    StorageError,
}

impl ErrorCode {
    pub const fn code(&self) -> i32 {
        match self {
            ErrorCode::InvalidBody => 1001,
            ErrorCode::MissingId => 1002,
            ErrorCode::InvalidId => 1003,
            ErrorCode::NotFound => 1004,
            ErrorCode::StoreError => 2001,
            ErrorCode::StorageError => 2002,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidBody => "INVALID_BODY",
            ErrorCode::MissingId => "MISSING_ID",
            ErrorCode::InvalidId => "INVALID_ID",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::StoreError => "STORE_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
        }
    }

    pub const fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidBody => "Invalid body",
            ErrorCode::MissingId => "id is required",
            ErrorCode::InvalidId => "invalid id",
            ErrorCode::NotFound => "Not found",
            ErrorCode::StoreError => "Database operation failed",
            ErrorCode::StorageError => "Object storage operation failed",
        }
    }

    pub const fn is_client_error(&self) -> bool {
        self.code() < 2000
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 6] = [
        ErrorCode::InvalidBody,
        ErrorCode::MissingId,
        ErrorCode::InvalidId,
        ErrorCode::NotFound,
        ErrorCode::StoreError,
        ErrorCode::StorageError,
    ];

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<i32> = ALL.iter().map(ErrorCode::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ALL.len());
    }

    #[test]
    fn test_serializes_as_screaming_snake_case() {
        for code in ALL {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, serde_json::json!(code.as_str()));
        }
    }

    #[test]
    fn test_client_error_ranges() {
        assert!(ErrorCode::InvalidBody.is_client_error());
        assert!(ErrorCode::NotFound.is_client_error());
        assert!(!ErrorCode::StoreError.is_client_error());
        assert!(!ErrorCode::StorageError.is_client_error());
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ErrorCode::InvalidBody.default_message(), "Invalid body");
        assert_eq!(ErrorCode::MissingId.default_message(), "id is required");
        assert_eq!(ErrorCode::InvalidId.default_message(), "invalid id");
    }
}
