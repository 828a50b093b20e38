//! Configuration for the token service

use std::time::Duration;

use account_shared::config::auth::{
    JwtConfig, DEFAULT_ID_TOKEN_EXPIRY_SECS, DEFAULT_REFRESH_TOKEN_EXPIRY_SECS,
};

use crate::errors::DomainError;

/// Longest lifetime accepted for either token, ten years in seconds
pub const MAX_TOKEN_LIFETIME_SECS: i64 = 10 * 365 * 24 * 3600;

/// Configuration for the token service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenServiceConfig {
    /// Identity token lifetime in seconds
    pub id_token_expiry_secs: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_expiry_secs: i64,
    /// Clock skew tolerated when checking expiry, in seconds
    pub leeway_secs: u64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            id_token_expiry_secs: DEFAULT_ID_TOKEN_EXPIRY_SECS,
            refresh_token_expiry_secs: DEFAULT_REFRESH_TOKEN_EXPIRY_SECS,
            leeway_secs: 0,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            id_token_expiry_secs: config.id_token_expiry_secs,
            refresh_token_expiry_secs: config.refresh_token_expiry_secs,
            ..Default::default()
        }
    }
}

impl TokenServiceConfig {
    /// Rejects non-positive lifetimes and lifetimes above [`MAX_TOKEN_LIFETIME_SECS`]
    pub fn validate(&self) -> Result<(), DomainError> {
        check_lifetime("id token", self.id_token_expiry_secs)?;
        check_lifetime("refresh token", self.refresh_token_expiry_secs)
    }

    /// Time-to-live handed to the token store for a new refresh token
    pub fn refresh_token_ttl(&self) -> Duration {
        Duration::from_secs(u64::try_from(self.refresh_token_expiry_secs).unwrap_or_default())
    }
}

fn check_lifetime(label: &str, secs: i64) -> Result<(), DomainError> {
    if secs <= 0 {
        return Err(DomainError::Validation {
            message: format!("{} lifetime must be positive, got {}s", label, secs),
        });
    }
    if secs > MAX_TOKEN_LIFETIME_SECS {
        return Err(DomainError::Validation {
            message: format!(
                "{} lifetime must be at most {}s, got {}s",
                label, MAX_TOKEN_LIFETIME_SECS, secs
            ),
        });
    }
    Ok(())
}
