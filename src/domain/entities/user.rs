//! User entity backing the credential store.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A user account.
///
/// `password_hash` is an opaque bcrypt digest. Raw passwords never reach this
/// type; see [`crate::utils::password::hash_password`].
#[derive(Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: i64,
        username: String,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            password_hash,
            created_at,
        }
    }

    /// Fields that may be exposed to other users.
    pub fn public(&self) -> PublicUser {
        PublicUser {
            username: self.username.clone(),
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"***")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Public projection of a user, embedded in redirect rule representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
    pub username: String,
}

/// Input for inserting a user. Carries an already-computed hash.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}
