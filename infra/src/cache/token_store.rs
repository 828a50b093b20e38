//! Redis-backed refresh token store
//!
//! Each live refresh token id is a key `{prefix}:{user_id}:{token_id}` whose
//! Redis TTL is the token's remaining lifetime. Deleting the key invalidates
//! the token; expired keys disappear on their own.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error};

use account_core::errors::DomainError;
use account_core::repositories::TokenRepository;
use account_shared::config::CacheConfig;

use crate::InfrastructureError;

use super::redis_client::RedisClient;

/// Value stored under each key; only the key's presence matters
const TOKEN_MARKER: &str = "0";

/// Refresh token store over a shared [`RedisClient`]
#[derive(Clone)]
pub struct RedisTokenRepository {
    client: RedisClient,
    key_prefix: String,
}

impl RedisTokenRepository {
    /// Create a store over an existing client
    pub fn new(client: RedisClient, key_prefix: impl Into<String>) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
        }
    }

    /// Connect to Redis and create a store using the configured prefix
    pub async fn connect(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        let client = RedisClient::new(config).await?;
        Ok(Self::new(client, config.key_prefix.clone()))
    }

    /// Key under which a refresh token id is tracked
    pub fn token_key(&self, user_id: &str, token_id: &str) -> String {
        token_key(&self.key_prefix, user_id, token_id)
    }

    /// Whether a refresh token id is currently registered
    pub async fn is_active(&self, user_id: &str, token_id: &str) -> Result<bool, DomainError> {
        Ok(self.client.exists(&self.token_key(user_id, token_id)).await?)
    }

    /// Underlying Redis client
    pub fn client(&self) -> &RedisClient {
        &self.client
    }
}

#[async_trait]
impl TokenRepository for RedisTokenRepository {
    async fn set_refresh_token(
        &self,
        user_id: &str,
        token_id: &str,
        expires_in: Duration,
    ) -> Result<(), DomainError> {
        let ttl_secs = store_ttl(expires_in)?;

        let key = self.token_key(user_id, token_id);
        self.client
            .set_with_expiry(&key, TOKEN_MARKER, ttl_secs)
            .await
            .map_err(|e| {
                error!(user_id = %user_id, error = %e, "Could not store refresh token");
                DomainError::from(e)
            })
    }

    async fn delete_refresh_token(&self, user_id: &str, token_id: &str) -> Result<(), DomainError> {
        let key = self.token_key(user_id, token_id);
        let existed = self.client.delete(&key).await?;

        if !existed {
            debug!(user_id = %user_id, "Refresh token to delete was already gone");
        }
        Ok(())
    }

    async fn is_refresh_token_active(
        &self,
        user_id: &str,
        token_id: &str,
    ) -> Result<bool, DomainError> {
        self.is_active(user_id, token_id).await
    }
}

pub(crate) fn token_key(prefix: &str, user_id: &str, token_id: &str) -> String {
    format!("{}:{}:{}", prefix, user_id, token_id)
}

/// TTL handed to Redis; a zero duration is an internal error
pub(crate) fn store_ttl(expires_in: Duration) -> Result<u64, DomainError> {
    ttl_seconds(expires_in)
        .ok_or_else(|| DomainError::internal("refresh token ttl must be at least one second"))
}

/// Whole seconds for a Redis TTL, rounding partial seconds up
///
/// `None` for a zero duration, which Redis would reject.
pub(crate) fn ttl_seconds(expires_in: Duration) -> Option<u64> {
    let secs = expires_in.as_secs() + u64::from(expires_in.subsec_nanos() > 0);
    (secs > 0).then_some(secs)
}
