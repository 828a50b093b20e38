//! Token repository trait defining the refresh token store contract.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::DomainError;

/// Store tracking which refresh token identifiers are live for a user
///
/// The token service only records identifiers here, never signed tokens.
/// A refresh token is only exchanged while its identifier is active.
/// `set_refresh_token` and `delete_refresh_token` are called independently
/// and must not assume they run inside one transaction.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Register a refresh token identifier for a user
    ///
    /// Upserts the `(user_id, token_id)` association; an existing entry for
    /// the same pair is overwritten and its time-to-live reset.
    ///
    /// # Arguments
    /// * `user_id` - The user the token was issued to
    /// * `token_id` - The refresh token identifier
    /// * `expires_in` - How long the association stays live
    ///
    /// # Example
    /// ```no_run
    /// # use std::time::Duration;
    /// # use account_core::repositories::TokenRepository;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// repo.set_refresh_token("0b7c...", "9f2e...", Duration::from_secs(3 * 24 * 3600)).await?;
    /// # Ok(())
    /// # }
    /// ```
    async fn set_refresh_token(
        &self,
        user_id: &str,
        token_id: &str,
        expires_in: Duration,
    ) -> Result<(), DomainError>;

    /// Remove a specific refresh token identifier for a user
    ///
    /// Removing an association that does not exist (already deleted or
    /// expired) is not an error.
    async fn delete_refresh_token(&self, user_id: &str, token_id: &str) -> Result<(), DomainError>;

    /// Whether a refresh token identifier is still registered for a user
    ///
    /// Deleted and expired associations report `false`.
    async fn is_refresh_token_active(
        &self,
        user_id: &str,
        token_id: &str,
    ) -> Result<bool, DomainError>;
}

#[async_trait]
impl<T: TokenRepository + ?Sized> TokenRepository for Arc<T> {
    async fn set_refresh_token(
        &self,
        user_id: &str,
        token_id: &str,
        expires_in: Duration,
    ) -> Result<(), DomainError> {
        (**self).set_refresh_token(user_id, token_id, expires_in).await
    }

    async fn delete_refresh_token(&self, user_id: &str, token_id: &str) -> Result<(), DomainError> {
        (**self).delete_refresh_token(user_id, token_id).await
    }

    async fn is_refresh_token_active(
        &self,
        user_id: &str,
        token_id: &str,
    ) -> Result<bool, DomainError> {
        (**self).is_refresh_token_active(user_id, token_id).await
    }
}
