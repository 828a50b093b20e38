//! Shared error kinds and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Transport-neutral classification of a failure
///
/// Domain errors expose one of these; the surrounding transport maps it to a
/// status code with [`ErrorKind::status_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Credentials or token rejected
    Authorization,
    /// Malformed or invalid request input
    BadRequest,
    /// Resource already exists
    Conflict,
    /// Resource does not exist
    NotFound,
    /// Unexpected failure inside the service
    Internal,
}

impl ErrorKind {
    /// HTTP status code for this kind
    pub const fn status_code(self) -> u16 {
        match self {
            ErrorKind::Authorization => 401,
            ErrorKind::BadRequest => 400,
            ErrorKind::Conflict => 409,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }

    /// Stable error code string for API clients
    pub const fn code(self) -> &'static str {
        match self {
            ErrorKind::Authorization => error_codes::UNAUTHORIZED,
            ErrorKind::BadRequest => error_codes::BAD_REQUEST,
            ErrorKind::Conflict => error_codes::CONFLICT,
            ErrorKind::NotFound => error_codes::NOT_FOUND,
            ErrorKind::Internal => error_codes::INTERNAL_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const CONFLICT: &str = "CONFLICT";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Trait for converting errors to ErrorResponse
pub trait IntoErrorResponse {
    /// Classification used for the status code
    fn kind(&self) -> ErrorKind;

    fn to_error_response(&self) -> ErrorResponse;

    /// HTTP status code for this error
    fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

/// Result type with ErrorResponse as error
pub type ApiResult<T> = Result<T, ErrorResponse>;
