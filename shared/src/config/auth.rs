//! Token signing configuration

use serde::{Deserialize, Serialize};

/// Default identity token lifetime (15 minutes)
pub const DEFAULT_ID_TOKEN_EXPIRY_SECS: i64 = 900;

/// Default refresh token lifetime (3 days)
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_SECS: i64 = 259_200;

/// JWT configuration for identity and refresh tokens
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Path to the PEM-encoded RSA private key used to sign identity tokens
    pub private_key_path: String,

    /// Path to the PEM-encoded RSA public key used to verify identity tokens
    pub public_key_path: String,

    /// HMAC secret used to sign and verify refresh tokens
    pub refresh_secret: String,

    /// Identity token lifetime in seconds
    #[serde(default = "default_id_token_expiry")]
    pub id_token_expiry_secs: i64,

    /// Refresh token lifetime in seconds
    #[serde(default = "default_refresh_token_expiry")]
    pub refresh_token_expiry_secs: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("private_key_path", &self.private_key_path)
            .field("public_key_path", &self.public_key_path)
            .field("refresh_secret", &"<redacted>")
            .field("id_token_expiry_secs", &self.id_token_expiry_secs)
            .field("refresh_token_expiry_secs", &self.refresh_token_expiry_secs)
            .finish()
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            private_key_path: String::from("rsa_private.pem"),
            public_key_path: String::from("rsa_public.pem"),
            refresh_secret: String::new(),
            id_token_expiry_secs: DEFAULT_ID_TOKEN_EXPIRY_SECS,
            refresh_token_expiry_secs: DEFAULT_REFRESH_TOKEN_EXPIRY_SECS,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with a refresh secret
    pub fn new(refresh_secret: impl Into<String>) -> Self {
        Self {
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Set the key file locations
    pub fn with_key_paths(
        mut self,
        private_key_path: impl Into<String>,
        public_key_path: impl Into<String>,
    ) -> Self {
        self.private_key_path = private_key_path.into();
        self.public_key_path = public_key_path.into();
        self
    }

    /// Set identity token lifetime in minutes
    pub fn with_id_expiry_minutes(mut self, minutes: i64) -> Self {
        self.id_token_expiry_secs = minutes * 60;
        self
    }

    /// Set refresh token lifetime in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry_secs = days * 86400;
        self
    }

    /// Create from environment variables
    ///
    /// Reads `PRIV_KEY_FILE`, `PUB_KEY_FILE`, `REFRESH_SECRET`,
    /// `ID_TOKEN_EXP` and `REFRESH_TOKEN_EXP`. Unparseable lifetimes fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            private_key_path: std::env::var("PRIV_KEY_FILE")
                .unwrap_or(defaults.private_key_path),
            public_key_path: std::env::var("PUB_KEY_FILE")
                .unwrap_or(defaults.public_key_path),
            refresh_secret: std::env::var("REFRESH_SECRET").unwrap_or_default(),
            id_token_expiry_secs: std::env::var("ID_TOKEN_EXP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ID_TOKEN_EXPIRY_SECS),
            refresh_token_expiry_secs: std::env::var("REFRESH_TOKEN_EXP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REFRESH_TOKEN_EXPIRY_SECS),
        }
    }

    /// Whether a refresh secret has been configured
    pub fn has_refresh_secret(&self) -> bool {
        !self.refresh_secret.is_empty()
    }
}

fn default_id_token_expiry() -> i64 {
    DEFAULT_ID_TOKEN_EXPIRY_SECS
}

fn default_refresh_token_expiry() -> i64 {
    DEFAULT_REFRESH_TOKEN_EXPIRY_SECS
}
