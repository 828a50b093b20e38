//! Cache module for Redis-based storage
//!
//! Provides a retrying Redis client and the refresh token store built on it.

pub mod redis_client;
pub mod token_store;


pub use redis_client::RedisClient;
pub use token_store::RedisTokenRepository;

// Re-export commonly used types
pub use account_shared::config::CacheConfig;
