//! Token entities for JWT-based authentication.

use chrono::{DateTime, TimeZone, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{User, UserProfile};

/// Number of random bytes in a refresh token identifier (256 bits)
pub const REFRESH_TOKEN_ID_BYTES: usize = 32;

/// Claims carried by an identity token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTokenClaims {
    /// Public view of the user the token was issued to
    pub user: UserProfile,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl IdTokenClaims {
    /// Creates identity claims for `user`, valid for `expiry_secs` from `now`
    pub fn new(user: &User, now: DateTime<Utc>, expiry_secs: i64) -> Self {
        let iat = now.timestamp();

        Self {
            user: UserProfile::from(user),
            iat,
            exp: iat.saturating_add(expiry_secs),
        }
    }

    /// Checks if the claims have expired at `now`; `exp` itself is still valid
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }

    /// Expiration as a timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

/// Claims carried by a refresh token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    /// User the token was issued to
    pub uid: Uuid,

    /// Refresh token identifier, tracked by the token store
    pub jti: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl RefreshTokenClaims {
    /// Creates refresh claims with a fresh random identifier
    pub fn new(user_id: Uuid, now: DateTime<Utc>, expiry_secs: i64) -> Self {
        let iat = now.timestamp();

        Self {
            uid: user_id,
            jti: generate_token_id(),
            iat,
            exp: iat.saturating_add(expiry_secs),
        }
    }

    /// Checks if the claims have expired at `now`; `exp` itself is still valid
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }

    /// Expiration as a timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

/// Generates a refresh token identifier from the thread-local CSPRNG
pub fn generate_token_id() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_ID_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Signed identity and refresh tokens returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// RS256-signed identity token
    pub id_token: String,

    /// HS256-signed refresh token
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(id_token: String, refresh_token: String) -> Self {
        Self {
            id_token,
            refresh_token,
        }
    }
}

/// A refresh token whose signature and expiry have been verified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    /// The raw signed token
    pub token: String,

    /// Identifier tracked by the token store
    pub id: String,

    /// User the token was issued to
    pub user_id: Uuid,

    /// Expiration time
    pub expires_at: DateTime<Utc>,
}
