//! Token-related error types

use thiserror::Error;

/// Token-related errors
///
/// Every identity or refresh token rejection is reported as `InvalidToken`,
/// whatever the underlying reason (bad signature, wrong algorithm, expired,
/// malformed). The reason is logged by the service, never returned.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    Generation,

    #[error("Key load error: {message}")]
    KeyLoad { message: String },
}

impl TokenError {
    /// Whether this error means the presented token was rejected
    pub fn is_authorization(&self) -> bool {
        matches!(self, TokenError::InvalidToken)
    }
}
