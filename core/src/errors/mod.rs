//! Domain-specific error types and error handling.

mod types;


pub use types::TokenError;

use account_shared::errors::{ErrorKind, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Resource already exists: {resource}")]
    Conflict { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Shorthand for an internal error with a message
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Transport-neutral classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } => ErrorKind::BadRequest,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Conflict { .. } => ErrorKind::Conflict,
            DomainError::Unauthorized => ErrorKind::Authorization,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Token(e) if e.is_authorization() => ErrorKind::Authorization,
            DomainError::Token(_) => ErrorKind::Internal,
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn kind(&self) -> ErrorKind {
        DomainError::kind(self)
    }

    fn to_error_response(&self) -> ErrorResponse {
        let kind = DomainError::kind(self);
        // Internal details stay in the logs.
        let message = match kind {
            ErrorKind::Internal => "An internal error occurred".to_string(),
            _ => self.to_string(),
        };
        ErrorResponse::new(kind.code(), message)
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
