//! Credential store management: creating users and changing passwords.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::{AppError, REQUIRED_FIELD_MESSAGE};
use crate::utils::password::hash_password;

/// Service for managing user accounts.
///
/// Passwords are hashed here, on the blocking pool, before anything reaches the
/// repository. The repository API only ever sees `password_hash`.
pub struct UserService<U: UserRepository> {
    repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(repository: Arc<U>) -> Self {
        Self { repository }
    }

    /// Creates a user, hashing the password before it reaches storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if username or password is empty.
    pub async fn create_user(&self, username: &str, password: &str) -> Result<User, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::field("username", REQUIRED_FIELD_MESSAGE));
        }
        if password.is_empty() {
            return Err(AppError::field("password", REQUIRED_FIELD_MESSAGE));
        }

        let password_hash = hash_off_thread(password).await?;

        let user = self
            .repository
            .create(NewUser {
                username: username.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "User created");

        Ok(user)
    }

    /// Replaces a user's password. The new hash is computed immediately.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Validation`] if the password is empty.
    pub async fn set_password(&self, user_id: i64, password: &str) -> Result<(), AppError> {
        if password.is_empty() {
            return Err(AppError::field("password", REQUIRED_FIELD_MESSAGE));
        }

        let password_hash = hash_off_thread(password).await?;

        if !self
            .repository
            .update_password_hash(user_id, &password_hash)
            .await?
        {
            return Err(AppError::not_found("User not found"));
        }

        tracing::info!(user_id, "Password changed");

        Ok(())
    }

    /// Looks a user up by numeric id, falling back to username.
    pub async fn find(&self, username_or_id: &str) -> Result<Option<User>, AppError> {
        if let Ok(id) = username_or_id.parse::<i64>()
            && let Some(user) = self.repository.find_by_id(id).await?
        {
            return Ok(Some(user));
        }

        self.repository.find_by_username(username_or_id).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }
}

async fn hash_off_thread(password: &str) -> Result<String, AppError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
}
