//! # Infrastructure Layer
//!
//! Concrete implementations of the repository contracts defined in
//! `account_core`. Currently this is the Redis-backed refresh token store.

/// Cache module - Redis client and refresh token store
pub mod cache;

pub use cache::{RedisClient, RedisTokenRepository};

use account_core::errors::DomainError;
use account_core::services::token::{KeyManager, TokenService, TokenServiceConfig};
use account_shared::config::AppConfig;

/// Build a token service backed by Redis from the application configuration
///
/// Loads the signing keys named in `config.jwt` and connects to the Redis
/// server in `config.cache`. Key or configuration problems are reported
/// before any connection is attempted.
pub async fn initialize(
    config: &AppConfig,
) -> Result<TokenService<RedisTokenRepository>, DomainError> {
    tracing::info!(environment = %config.environment, "Initializing token service");

    let keys = KeyManager::from_config(&config.jwt)?;
    let service_config = TokenServiceConfig::from(&config.jwt);
    service_config.validate()?;

    let store = RedisTokenRepository::connect(&config.cache).await?;
    let service = TokenService::new(store, keys, service_config)?;

    tracing::info!("Token service initialized");
    Ok(service)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_core::errors::TokenError;

    #[tokio::test]
    async fn test_initialize_fails_on_missing_keys_before_connecting() {
        let mut config = AppConfig::default();
        config.jwt.private_key_path = "/nonexistent/rsa_private.pem".to_string();
        config.jwt.refresh_secret = "secret".to_string();
        config.cache.url = "invalid://url".to_string();

        let result = initialize(&config).await;

        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::KeyLoad { .. }))
        ));
    }
}
