//! Main token service implementation

use chrono::Utc;
use jsonwebtoken::{decode, encode, Header, Validation};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::domain::entities::token::{
    IdTokenClaims, RefreshToken, RefreshTokenClaims, TokenPair,
};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;
use super::key_manager::{KeyManager, ID_TOKEN_ALGORITHM, REFRESH_TOKEN_ALGORITHM};

/// Service issuing, validating and rotating identity/refresh token pairs
///
/// Holds no mutable state besides what the repository keeps, so one instance
/// can be shared (behind an `Arc`) by any number of concurrent requests.
pub struct TokenService<R: TokenRepository> {
    repository: R,
    keys: KeyManager,
    config: TokenServiceConfig,
    id_validation: Validation,
    refresh_validation: Validation,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Refresh token store
    /// * `keys` - Identity and refresh signing keys
    /// * `config` - Token lifetimes
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or a validation error for non-positive lifetimes
    pub fn new(
        repository: R,
        keys: KeyManager,
        config: TokenServiceConfig,
    ) -> Result<Self, DomainError> {
        config.validate()?;

        // Only the pinned algorithm is accepted; the token header never
        // chooses the verification scheme.
        let mut id_validation = Validation::new(ID_TOKEN_ALGORITHM);
        id_validation.leeway = config.leeway_secs;
        id_validation.validate_exp = true;

        let mut refresh_validation = Validation::new(REFRESH_TOKEN_ALGORITHM);
        refresh_validation.leeway = config.leeway_secs;
        refresh_validation.validate_exp = true;

        Ok(Self {
            repository,
            keys,
            config,
            id_validation,
            refresh_validation,
        })
    }

    /// Issues a new identity/refresh token pair for a user
    ///
    /// The new refresh token id is registered with the store before the
    /// previous one (if any) is deleted. Failing to register fails the whole
    /// call; failing to delete the previous id is logged and ignored, the
    /// stale entry expires through its TTL.
    ///
    /// # Arguments
    ///
    /// * `user` - The user to issue tokens for; its id must not be nil
    /// * `previous_token_id` - Refresh token id being exchanged, or `""`
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Signed tokens whose refresh id is tracked
    /// * `Err(DomainError)` - Invalid user, signing failure or store failure
    pub async fn issue_token_pair(
        &self,
        user: &User,
        previous_token_id: &str,
    ) -> Result<TokenPair, DomainError> {
        if user.id.is_nil() {
            return Err(DomainError::Validation {
                message: "user id must not be empty".to_string(),
            });
        }

        let now = Utc::now();

        let id_claims = IdTokenClaims::new(user, now, self.config.id_token_expiry_secs);
        let id_token = self.sign_id_token(&id_claims)?;

        let refresh_claims =
            RefreshTokenClaims::new(user.id, now, self.config.refresh_token_expiry_secs);
        let refresh_token = self.sign_refresh_token(&refresh_claims)?;

        let user_id = user.id.to_string();

        self.repository
            .set_refresh_token(&user_id, &refresh_claims.jti, self.config.refresh_token_ttl())
            .await
            .map_err(|e| {
                error!(user_id = %user_id, error = %e, "Failed to register refresh token");
                DomainError::internal("failed to register refresh token")
            })?;

        if !previous_token_id.is_empty() {
            if let Err(e) = self
                .repository
                .delete_refresh_token(&user_id, previous_token_id)
                .await
            {
                warn!(
                    user_id = %user_id,
                    error = %e,
                    "Could not delete previous refresh token, leaving it to expire"
                );
            }
        }

        debug!(user_id = %user_id, rotated = !previous_token_id.is_empty(), "Issued token pair");

        Ok(TokenPair::new(id_token, refresh_token))
    }

    /// Validates an identity token and returns the user it was issued to
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - Public user fields from the token; password is empty
    /// * `Err(DomainError)` - `TokenError::InvalidToken` for any rejection
    pub fn validate_id_token(&self, token: &str) -> Result<User, DomainError> {
        let token_data =
            decode::<IdTokenClaims>(token, self.keys.id_decoding_key(), &self.id_validation)
                .map_err(|e| {
                    debug!(reason = ?e.kind(), "Identity token rejected");
                    DomainError::Token(TokenError::InvalidToken)
                })?;

        Ok(User::from(token_data.claims.user))
    }

    /// Validates a refresh token
    ///
    /// Only checks signature and expiry; whether the id is still registered
    /// is up to the store.
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshToken)` - The token id and owning user
    /// * `Err(DomainError)` - `TokenError::InvalidToken` for any rejection
    pub fn validate_refresh_token(&self, token: &str) -> Result<RefreshToken, DomainError> {
        let token_data = decode::<RefreshTokenClaims>(
            token,
            self.keys.refresh_decoding_key(),
            &self.refresh_validation,
        )
        .map_err(|e| {
            debug!(reason = ?e.kind(), "Refresh token rejected");
            DomainError::Token(TokenError::InvalidToken)
        })?;

        let claims = token_data.claims;
        if claims.jti.is_empty() || claims.uid.is_nil() {
            debug!("Refresh token rejected: missing id or user");
            return Err(DomainError::Token(TokenError::InvalidToken));
        }

        let expires_at = claims
            .expires_at()
            .ok_or(DomainError::Token(TokenError::InvalidToken))?;

        Ok(RefreshToken {
            token: token.to_string(),
            id: claims.jti,
            user_id: claims.uid,
            expires_at,
        })
    }

    /// Exchanges a refresh token for a new pair, invalidating the old id
    ///
    /// The refresh token must have been issued to `user` and its id must
    /// still be registered with the store. An id that was already rotated
    /// away or revoked is rejected as `InvalidToken`.
    pub async fn rotate(&self, user: &User, refresh_token: &str) -> Result<TokenPair, DomainError> {
        let current = self.validate_refresh_token(refresh_token)?;

        if current.user_id != user.id {
            warn!(
                user_id = %user.id,
                token_user_id = %current.user_id,
                "Refresh token presented for a different user"
            );
            return Err(DomainError::Token(TokenError::InvalidToken));
        }

        let user_id = user.id.to_string();
        let active = self
            .repository
            .is_refresh_token_active(&user_id, &current.id)
            .await
            .map_err(|e| {
                error!(user_id = %user_id, error = %e, "Failed to look up refresh token");
                DomainError::internal("failed to look up refresh token")
            })?;

        if !active {
            warn!(user_id = %user_id, "Refresh token is no longer active");
            return Err(DomainError::Token(TokenError::InvalidToken));
        }

        self.issue_token_pair(user, &current.id).await
    }

    /// Invalidates a single refresh token id, e.g. on signout
    pub async fn revoke_refresh_token(
        &self,
        user_id: Uuid,
        token_id: &str,
    ) -> Result<(), DomainError> {
        let user_id = user_id.to_string();

        self.repository
            .delete_refresh_token(&user_id, token_id)
            .await
            .map_err(|e| {
                error!(user_id = %user_id, error = %e, "Failed to revoke refresh token");
                DomainError::internal("failed to revoke refresh token")
            })
    }

    /// Token lifetimes in use
    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    fn sign_id_token(&self, claims: &IdTokenClaims) -> Result<String, DomainError> {
        encode(&Header::new(ID_TOKEN_ALGORITHM), claims, self.keys.id_encoding_key()).map_err(|e| {
            error!(error = %e, "Failed to sign identity token");
            DomainError::Token(TokenError::Generation)
        })
    }

    fn sign_refresh_token(&self, claims: &RefreshTokenClaims) -> Result<String, DomainError> {
        encode(&Header::new(REFRESH_TOKEN_ALGORITHM), claims, self.keys.refresh_encoding_key())
            .map_err(|e| {
                error!(error = %e, "Failed to sign refresh token");
                DomainError::Token(TokenError::Generation)
            })
    }
}
