pub mod token;
pub mod user;

pub use token::{InMemoryTokenRepository, TokenRepository};
pub use user::UserRepository;

#[cfg(test)]
pub use token::{MockTokenRepository, TokenStoreCall};
#[cfg(test)]
pub use user::MockUserRepository;
