//! Signing key material for identity and refresh tokens

use std::fs;
use std::path::{Path, PathBuf};

use account_shared::config::JwtConfig;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, TokenError};

/// Algorithm used for identity tokens (asymmetric)
pub const ID_TOKEN_ALGORITHM: Algorithm = Algorithm::RS256;

/// Algorithm used for refresh tokens (symmetric)
pub const REFRESH_TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Keys used to sign and verify tokens
///
/// Identity tokens are signed with an RSA private key so any holder of the
/// public key can verify them. Refresh tokens are signed with a shared HMAC
/// secret and can only be verified by backend components holding it.
/// Immutable once built; rotating keys means building a new manager.
#[derive(Clone)]
pub struct KeyManager {
    /// RSA private key for signing identity tokens
    id_encoding_key: EncodingKey,
    /// RSA public key for verifying identity tokens
    id_decoding_key: DecodingKey,
    /// HMAC key for signing refresh tokens
    refresh_encoding_key: EncodingKey,
    /// HMAC key for verifying refresh tokens
    refresh_decoding_key: DecodingKey,
    /// Where the RSA keys were loaded from
    source: KeySource,
}

/// Origin of the RSA key pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// Loaded from PEM files
    Files {
        private_key_path: PathBuf,
        public_key_path: PathBuf,
    },
    /// Supplied as PEM strings
    Memory,
}

impl std::fmt::Debug for KeyManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyManager")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl KeyManager {
    /// Creates a key manager from PEM strings
    ///
    /// # Arguments
    ///
    /// * `private_key_pem` - PEM-encoded RSA private key
    /// * `public_key_pem` - PEM-encoded RSA public key
    /// * `refresh_secret` - HMAC secret for refresh tokens, must not be empty
    ///
    /// # Returns
    ///
    /// * `Ok(KeyManager)` - Keys parsed and verified to form a pair
    /// * `Err(DomainError)` - Invalid key format, mismatched pair or empty secret
    pub fn from_pem_strings(
        private_key_pem: &str,
        public_key_pem: &str,
        refresh_secret: &str,
    ) -> Result<Self, DomainError> {
        Self::build(
            private_key_pem.as_bytes(),
            public_key_pem.as_bytes(),
            refresh_secret,
            KeySource::Memory,
        )
    }

    /// Creates a key manager from PEM files
    ///
    /// # Example
    ///
    /// ```no_run
    /// use account_core::services::token::KeyManager;
    ///
    /// let keys = KeyManager::from_pem_files(
    ///     "rsa_private.pem",
    ///     "rsa_public.pem",
    ///     "refresh-secret",
    /// ).expect("Failed to load keys");
    /// ```
    pub fn from_pem_files<P: AsRef<Path>>(
        private_key_path: P,
        public_key_path: P,
        refresh_secret: &str,
    ) -> Result<Self, DomainError> {
        let private_key_path = private_key_path.as_ref().to_path_buf();
        let public_key_path = public_key_path.as_ref().to_path_buf();

        let private_key_pem = fs::read(&private_key_path).map_err(|e| {
            key_load_error(format!(
                "Failed to read private key {}: {}",
                private_key_path.display(),
                e
            ))
        })?;

        let public_key_pem = fs::read(&public_key_path).map_err(|e| {
            key_load_error(format!(
                "Failed to read public key {}: {}",
                public_key_path.display(),
                e
            ))
        })?;

        Self::build(
            &private_key_pem,
            &public_key_pem,
            refresh_secret,
            KeySource::Files {
                private_key_path,
                public_key_path,
            },
        )
    }

    /// Creates a key manager from the JWT configuration
    pub fn from_config(config: &JwtConfig) -> Result<Self, DomainError> {
        Self::from_pem_files(
            &config.private_key_path,
            &config.public_key_path,
            &config.refresh_secret,
        )
    }

    fn build(
        private_key_pem: &[u8],
        public_key_pem: &[u8],
        refresh_secret: &str,
        source: KeySource,
    ) -> Result<Self, DomainError> {
        if refresh_secret.is_empty() {
            return Err(key_load_error("Refresh secret must not be empty"));
        }

        let id_encoding_key = EncodingKey::from_rsa_pem(private_key_pem)
            .map_err(|e| key_load_error(format!("Invalid private key format: {}", e)))?;

        let id_decoding_key = DecodingKey::from_rsa_pem(public_key_pem)
            .map_err(|e| key_load_error(format!("Invalid public key format: {}", e)))?;

        let manager = Self {
            id_encoding_key,
            id_decoding_key,
            refresh_encoding_key: EncodingKey::from_secret(refresh_secret.as_bytes()),
            refresh_decoding_key: DecodingKey::from_secret(refresh_secret.as_bytes()),
            source,
        };

        manager.verify_pair()?;

        Ok(manager)
    }

    /// Signs and verifies a throwaway token with both key sets
    fn verify_pair(&self) -> Result<(), DomainError> {
        let check = KeyCheck {
            check: true,
            exp: Utc::now().timestamp() + 60,
        };

        for (algorithm, encoding_key, decoding_key, label) in [
            (
                ID_TOKEN_ALGORITHM,
                &self.id_encoding_key,
                &self.id_decoding_key,
                "RSA private and public keys do not match",
            ),
            (
                REFRESH_TOKEN_ALGORITHM,
                &self.refresh_encoding_key,
                &self.refresh_decoding_key,
                "Refresh secret cannot sign tokens",
            ),
        ] {
            let token = encode(&Header::new(algorithm), &check, encoding_key)
                .map_err(|e| key_load_error(format!("{}: {}", label, e)))?;

            decode::<KeyCheck>(&token, decoding_key, &Validation::new(algorithm))
                .map_err(|e| key_load_error(format!("{}: {}", label, e)))?;
        }

        Ok(())
    }

    /// Key for signing identity tokens
    pub fn id_encoding_key(&self) -> &EncodingKey {
        &self.id_encoding_key
    }

    /// Key for verifying identity tokens
    pub fn id_decoding_key(&self) -> &DecodingKey {
        &self.id_decoding_key
    }

    /// Key for signing refresh tokens
    pub fn refresh_encoding_key(&self) -> &EncodingKey {
        &self.refresh_encoding_key
    }

    /// Key for verifying refresh tokens
    pub fn refresh_decoding_key(&self) -> &DecodingKey {
        &self.refresh_decoding_key
    }

    /// Where the RSA keys came from
    pub fn source(&self) -> &KeySource {
        &self.source
    }
}

#[derive(Serialize, Deserialize)]
struct KeyCheck {
    check: bool,
    exp: i64,
}

fn key_load_error(message: impl Into<String>) -> DomainError {
    DomainError::Token(TokenError::KeyLoad {
        message: message.into(),
    })
}
