//! Business services containing domain logic and use cases.

pub mod token;
pub mod user;

// Re-export commonly used types
pub use token::{KeyManager, KeySource, TokenService, TokenServiceConfig};
pub use user::UserService;
