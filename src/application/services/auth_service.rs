//! Authentication service: credential checks, login and access-token resolution.

use std::sync::Arc;

use crate::application::services::token_service::{TokenPair, TokenService, TokenType};
use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::verify_password;

/// Service tying the credential store to the token service.
///
/// Unknown usernames and wrong passwords produce the same
/// [`AppError::InvalidCredentials`] so callers cannot enumerate accounts.
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service.
    pub fn new(user_repository: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            tokens,
        }
    }

    /// Checks a username/password pair against the credential store.
    ///
    /// bcrypt runs on the blocking pool.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCredentials`] if the user does not exist or the
    /// password does not match.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.user_repository.find_by_username(username).await? else {
            tracing::debug!(username, "Login attempt for unknown user");
            return Err(AppError::InvalidCredentials);
        };

        let password = password.to_owned();
        let hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?;

        if !matches {
            tracing::debug!(user_id = user.id, "Login attempt with wrong password");
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Authenticates and issues an access/refresh token pair.
    ///
    /// # Errors
    ///
    /// See [`Self::authenticate`]. Token signing failures map to
    /// [`AppError::Internal`].
    pub async fn login(&self, username: &str, password: &str) -> Result<(User, TokenPair), AppError> {
        let user = self.authenticate(username, password).await?;
        let pair = self.tokens.issue_pair(&user)?;

        tracing::info!(user_id = user.id, "Issued token pair");

        Ok((user, pair))
    }

    /// Verifies an access token and loads the user it names.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is expired, invalid, of the
    /// wrong type, or names a user that no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve_access_token(&self, token: &str) -> Result<User, AppError> {
        let identity = self.tokens.verify(token, TokenType::Access)?;

        self.user_repository
            .find_by_id(identity.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("User not found"))
    }
}
