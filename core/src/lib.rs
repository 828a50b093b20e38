//! # Account Core
//!
//! Core domain layer for the account backend: user and token entities,
//! the token service that issues and rotates identity/refresh token pairs,
//! repository interfaces, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    IdTokenClaims, RefreshToken, RefreshTokenClaims, TokenPair, User, UserProfile,
};
pub use errors::{DomainError, DomainResult, TokenError};
pub use repositories::{InMemoryTokenRepository, TokenRepository, UserRepository};
pub use services::{KeyManager, KeySource, TokenService, TokenServiceConfig, UserService};
