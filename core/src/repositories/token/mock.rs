//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// A call received by [`MockTokenRepository`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStoreCall {
    Set {
        user_id: String,
        token_id: String,
        expires_in: Duration,
    },
    Delete {
        user_id: String,
        token_id: String,
    },
}

/// Mock token repository that records every call in order
///
/// Liveness checks are answered from the set/delete calls seen so far and
/// are not recorded.
#[derive(Default)]
pub struct MockTokenRepository {
    calls: Mutex<Vec<TokenStoreCall>>,
    active: Mutex<HashSet<(String, String)>>,
    fail_set_for: Mutex<HashSet<String>>,
    fail_delete: Mutex<bool>,
}

impl MockTokenRepository {
    /// Create a new mock repository where every call succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `set_refresh_token` fail for this user
    pub fn failing_set_for(self, user_id: impl Into<String>) -> Self {
        self.fail_set_for.lock().unwrap().insert(user_id.into());
        self
    }

    /// Make every `delete_refresh_token` fail
    pub fn failing_delete(self) -> Self {
        *self.fail_delete.lock().unwrap() = true;
        self
    }

    /// All calls received so far
    pub fn calls(&self) -> Vec<TokenStoreCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Only the `set_refresh_token` calls
    pub fn set_calls(&self) -> Vec<TokenStoreCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, TokenStoreCall::Set { .. }))
            .collect()
    }

    /// Only the `delete_refresh_token` calls
    pub fn delete_calls(&self) -> Vec<TokenStoreCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, TokenStoreCall::Delete { .. }))
            .collect()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn set_refresh_token(
        &self,
        user_id: &str,
        token_id: &str,
        expires_in: Duration,
    ) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(TokenStoreCall::Set {
            user_id: user_id.to_string(),
            token_id: token_id.to_string(),
            expires_in,
        });

        if self.fail_set_for.lock().unwrap().contains(user_id) {
            return Err(DomainError::internal("Error setting refresh token"));
        }
        self.active
            .lock()
            .unwrap()
            .insert((user_id.to_string(), token_id.to_string()));
        Ok(())
    }

    async fn delete_refresh_token(&self, user_id: &str, token_id: &str) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(TokenStoreCall::Delete {
            user_id: user_id.to_string(),
            token_id: token_id.to_string(),
        });

        if *self.fail_delete.lock().unwrap() {
            return Err(DomainError::internal("Error deleting refresh token"));
        }
        self.active
            .lock()
            .unwrap()
            .remove(&(user_id.to_string(), token_id.to_string()));
        Ok(())
    }

    async fn is_refresh_token_active(
        &self,
        user_id: &str,
        token_id: &str,
    ) -> Result<bool, DomainError> {
        Ok(self
            .active
            .lock()
            .unwrap()
            .contains(&(user_id.to_string(), token_id.to_string())))
    }
}
