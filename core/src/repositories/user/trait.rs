//! User repository trait defining the interface for user data persistence.
//!
//! Implementations live outside this crate; the token service never touches
//! user storage directly.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(())` - User stored
    /// * `Err(DomainError::Conflict)` - Email already registered
    /// * `Err(DomainError)` - Storage failure
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by email
    ///
    /// # Returns
    /// * `Ok(User)` - User found
    /// * `Err(DomainError::NotFound)` - No user with that email
    async fn find_by_email(&self, email: &str) -> Result<User, DomainError>;

    /// Find a user by id
    ///
    /// # Returns
    /// * `Ok(User)` - User found
    /// * `Err(DomainError::NotFound)` - No user with that id
    async fn find_by_id(&self, id: Uuid) -> Result<User, DomainError>;
}
