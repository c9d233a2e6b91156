//! Repository trait for the credential store.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user records.
///
/// Only password hashes cross this boundary. Hashing happens in
/// [`crate::application::services::UserService`] before any call here.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by username.
    ///
    /// Usernames are not unique at the schema level; the lowest id wins.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Lists all users ordered by id.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Replaces the stored password hash.
    ///
    /// Returns `Ok(false)` if no user has the given id.
    async fn update_password_hash(&self, id: i64, password_hash: &str) -> Result<bool, AppError>;
}
