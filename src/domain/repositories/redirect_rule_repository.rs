//! Repository trait for redirect rule data access.

use crate::domain::entities::{NewRedirectRule, RedirectRule, RedirectRulePatch};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Unique constraint on `redirect_identifier`. Implementations report
/// violations as [`AppError::Conflict`] carrying this name.
pub const IDENTIFIER_CONSTRAINT: &str = "redirect_rules_redirect_identifier_key";

/// Primary key constraint on `id`.
pub const PRIMARY_KEY_CONSTRAINT: &str = "redirect_rules_pkey";

/// Repository interface for redirect rules.
///
/// Lookups by `id` are always scoped to an owner: a rule owned by someone else
/// is indistinguishable from a missing one. Lookups by identifier are unscoped;
/// visibility filtering belongs to the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRedirectRuleRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_redirect_rule.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectRuleRepository: Send + Sync {
    /// Inserts a new rule.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the identifier (or id) is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_rule: NewRedirectRule) -> Result<RedirectRule, AppError>;

    /// Finds a rule by id, only if owned by `owner_id`.
    async fn find_by_id(&self, id: Uuid, owner_id: i64) -> Result<Option<RedirectRule>, AppError>;

    /// Finds a rule by its public identifier, regardless of owner or privacy.
    async fn find_by_identifier(&self, identifier: &str)
    -> Result<Option<RedirectRule>, AppError>;

    /// Lists every rule owned by `owner_id`, newest first.
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<RedirectRule>, AppError>;

    /// Applies a partial update and refreshes `modified_at`.
    ///
    /// Returns `Ok(None)` if no rule with this id is owned by `owner_id`.
    async fn update(
        &self,
        id: Uuid,
        owner_id: i64,
        patch: RedirectRulePatch,
    ) -> Result<Option<RedirectRule>, AppError>;

    /// Permanently removes a rule.
    ///
    /// Returns `Ok(false)` if no rule with this id is owned by `owner_id`.
    async fn delete(&self, id: Uuid, owner_id: i64) -> Result<bool, AppError>;
}
