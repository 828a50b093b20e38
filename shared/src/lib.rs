//! Shared utilities and common types for the account service
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error kinds, transport status mapping and response structures
//! - Tracing subscriber setup

pub mod config;
pub mod errors;
pub mod logging;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CacheConfig, Environment, JwtConfig, LogFormat, LoggingConfig};
pub use errors::{error_codes, ApiResult, ErrorKind, ErrorResponse, IntoErrorResponse};
pub use logging::init_tracing;
