//! Domain entities representing core business objects.

pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use token::{
    generate_token_id, IdTokenClaims, RefreshToken, RefreshTokenClaims, TokenPair,
    REFRESH_TOKEN_ID_BYTES,
};
pub use user::{User, UserProfile};
