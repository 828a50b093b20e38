//! Token service module for JWT management
//!
//! - Identity token issuance (RS256) and validation
//! - Refresh token issuance (HS256), validation and rotation
//! - Signing key material

mod config;
mod key_manager;
mod service;

#[cfg(test)]
mod tests;

pub use config::{TokenServiceConfig, MAX_TOKEN_LIFETIME_SECS};
pub use key_manager::{KeyManager, KeySource, ID_TOKEN_ALGORITHM, REFRESH_TOKEN_ALGORITHM};
pub use service::TokenService;
