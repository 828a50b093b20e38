//! Cache configuration module

use serde::{Deserialize, Serialize};

/// Redis configuration for the refresh token store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Prefix prepended to every refresh token key
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Maximum number of attempts for a Redis operation
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay between attempts in milliseconds (doubled per attempt)
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            key_prefix: default_key_prefix(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let key_prefix = std::env::var("REDIS_KEY_PREFIX")
            .unwrap_or_else(|_| default_key_prefix());
        let max_retries = std::env::var("REDIS_MAX_RETRIES")
            .unwrap_or_else(|_| "3".to_string())
            .parse()
            .unwrap_or(3);

        Self {
            url,
            key_prefix,
            max_retries,
            ..Default::default()
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

fn default_key_prefix() -> String {
    String::from("refresh_token")
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    100
}
