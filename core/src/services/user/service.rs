//! User service implementation

use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::UserRepository;

/// Service for reading user records
pub struct UserService<R: UserRepository> {
    repository: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service over a repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Get a user by id
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::NotFound)` - No user with that id
    pub async fn get(&self, uid: Uuid) -> Result<User, DomainError> {
        let user = self.repository.find_by_id(uid).await.map_err(|e| {
            debug!(user_id = %uid, error = %e, "User lookup failed");
            e
        })?;

        Ok(user)
    }
}
