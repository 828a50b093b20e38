//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token signing keys and lifetimes
//! - `cache` - Redis configuration for the refresh token store
//! - `environment` - Environment detection and logging configuration

pub mod auth;
pub mod cache;
pub mod environment;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Token signing configuration
    pub jwt: JwtConfig,

    /// Refresh token store configuration
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            jwt: JwtConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// The environment-specific `.env` file is loaded first, then a plain
    /// `.env`; variables already set in the process are never overwritten.
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        dotenvy::from_filename(env.env_file()).ok();
        dotenvy::dotenv().ok();

        Self {
            environment: env,
            jwt: JwtConfig::from_env(),
            cache: CacheConfig::from_env(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}
