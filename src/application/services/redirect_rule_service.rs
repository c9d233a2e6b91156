//! Redirect rule management and resolution.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{NewRedirectRule, RedirectRule, RedirectRulePatch, User};
use crate::domain::repositories::{
    IDENTIFIER_CONSTRAINT, PRIMARY_KEY_CONSTRAINT, RedirectRuleRepository,
};
use crate::error::AppError;
use crate::utils::identifier::generate_identifier;

/// Message used for every "rule not visible to you" outcome.
pub const RULE_NOT_FOUND: &str = "RedirectRule not found";

/// Maximum identifier generation attempts before giving up.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating, reading, updating and resolving redirect rules.
///
/// Owner-scoped operations take the authenticated [`User`]; a rule belonging to
/// anyone else surfaces as [`AppError::NotFound`], never as a permission error.
pub struct RedirectRuleService<R: RedirectRuleRepository> {
    repository: Arc<R>,
}

impl<R: RedirectRuleRepository> RedirectRuleService<R> {
    /// Creates a new redirect rule service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a rule owned by `owner` with a freshly generated id and identifier.
    ///
    /// # Collision Handling
    ///
    /// A unique violation on the identifier or primary key means a generated
    /// value was already taken. Both are regenerated and the insert retried, up
    /// to 10 attempts. Any other conflict is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if every attempt collides or on database
    /// errors.
    pub async fn create(
        &self,
        owner: &User,
        redirect_url: String,
        is_private: bool,
    ) -> Result<RedirectRule, AppError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let new_rule = NewRedirectRule {
                id: Uuid::new_v4(),
                redirect_url: redirect_url.clone(),
                is_private,
                redirect_identifier: generate_identifier(),
                owner_id: Some(owner.id),
            };

            match self.repository.create(new_rule).await {
                Ok(rule) => {
                    tracing::info!(
                        rule_id = %rule.id,
                        identifier = %rule.redirect_identifier,
                        owner_id = owner.id,
                        "Redirect rule created"
                    );
                    return Ok(rule);
                }
                Err(e) if is_key_collision(&e) => {
                    tracing::debug!(attempt, "Identifier collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique redirect identifier: too many collisions",
        ))
    }

    /// Fetches a rule by id, scoped to `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the rule does not exist or belongs to
    /// someone else.
    pub async fn get_by_id(&self, id: Uuid, owner: &User) -> Result<RedirectRule, AppError> {
        self.repository
            .find_by_id(id, owner.id)
            .await?
            .ok_or_else(|| AppError::not_found(RULE_NOT_FOUND))
    }

    /// Unscoped lookup by public identifier. Visibility is the caller's concern.
    pub async fn get_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<RedirectRule>, AppError> {
        self.repository.find_by_identifier(identifier).await
    }

    /// Lists all rules owned by `owner`.
    pub async fn list_by_owner(&self, owner: &User) -> Result<Vec<RedirectRule>, AppError> {
        self.repository.list_by_owner(owner.id).await
    }

    /// Applies a partial update to a rule owned by `owner`.
    ///
    /// Fields left as `None` in `patch` are unchanged; `modified_at` is always
    /// refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the rule does not exist or belongs to
    /// someone else.
    pub async fn update(
        &self,
        id: Uuid,
        owner: &User,
        patch: RedirectRulePatch,
    ) -> Result<RedirectRule, AppError> {
        let rule = self
            .repository
            .update(id, owner.id, patch)
            .await?
            .ok_or_else(|| AppError::not_found(RULE_NOT_FOUND))?;

        tracing::info!(rule_id = %rule.id, owner_id = owner.id, "Redirect rule updated");

        Ok(rule)
    }

    /// Permanently deletes a rule owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the rule does not exist or belongs to
    /// someone else.
    pub async fn delete(&self, id: Uuid, owner: &User) -> Result<(), AppError> {
        if !self.repository.delete(id, owner.id).await? {
            return Err(AppError::not_found(RULE_NOT_FOUND));
        }

        tracing::info!(rule_id = %id, owner_id = owner.id, "Redirect rule deleted");

        Ok(())
    }

    /// Resolves an identifier for an anonymous caller.
    ///
    /// Private rules are reported exactly like missing ones.
    pub async fn resolve_public(&self, identifier: &str) -> Result<RedirectRule, AppError> {
        match self.get_by_identifier(identifier).await? {
            Some(rule) if rule.is_public() => Ok(rule),
            _ => Err(AppError::not_found(RULE_NOT_FOUND)),
        }
    }

    /// Resolves an identifier for an authenticated caller, regardless of privacy
    /// or ownership.
    pub async fn resolve_private(&self, identifier: &str) -> Result<RedirectRule, AppError> {
        self.get_by_identifier(identifier)
            .await?
            .ok_or_else(|| AppError::not_found(RULE_NOT_FOUND))
    }
}

/// A collision on either generated key is worth another attempt.
fn is_key_collision(err: &AppError) -> bool {
    err.is_conflict_on(IDENTIFIER_CONSTRAINT) || err.is_conflict_on(PRIMARY_KEY_CONSTRAINT)
}
