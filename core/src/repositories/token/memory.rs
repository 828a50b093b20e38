//! In-process refresh token store

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// Refresh token store backed by a process-local map
///
/// Entries past their time-to-live are treated as absent. Suitable for
/// tests and single-instance deployments; state is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryTokenRepository {
    tokens: RwLock<HashMap<(String, String), Instant>>,
}

impl InMemoryTokenRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `token_id` is currently live for `user_id`
    pub async fn is_active(&self, user_id: &str, token_id: &str) -> bool {
        let tokens = self.tokens.read().await;
        tokens
            .get(&(user_id.to_string(), token_id.to_string()))
            .is_some_and(|expires_at| *expires_at > Instant::now())
    }

    /// Number of live entries
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        let tokens = self.tokens.read().await;
        tokens.values().filter(|expires_at| **expires_at > now).count()
    }

    /// Whether no live entries remain
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop expired entries, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, expires_at| *expires_at > now);
        before - tokens.len()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn set_refresh_token(
        &self,
        user_id: &str,
        token_id: &str,
        expires_in: Duration,
    ) -> Result<(), DomainError> {
        let expires_at = Instant::now()
            .checked_add(expires_in)
            .ok_or_else(|| DomainError::internal("refresh token ttl overflows the clock"))?;

        let mut tokens = self.tokens.write().await;
        tokens.insert((user_id.to_string(), token_id.to_string()), expires_at);
        Ok(())
    }

    async fn delete_refresh_token(&self, user_id: &str, token_id: &str) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;
        tokens.remove(&(user_id.to_string(), token_id.to_string()));
        Ok(())
    }

    async fn is_refresh_token_active(
        &self,
        user_id: &str,
        token_id: &str,
    ) -> Result<bool, DomainError> {
        Ok(self.is_active(user_id, token_id).await)
    }
}
