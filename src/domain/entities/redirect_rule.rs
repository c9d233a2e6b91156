//! Redirect rule entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::user::PublicUser;

/// Length of a generated `redirect_identifier`.
pub const REDIRECT_IDENTIFIER_LENGTH: usize = 10;

/// A mapping from a short public identifier to a target URL.
///
/// `id` and `redirect_identifier` are assigned at creation and never change.
/// `owner` is `None` for ownerless legacy rules.
#[derive(Debug, Clone)]
pub struct RedirectRule {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub redirect_url: String,
    pub is_private: bool,
    pub redirect_identifier: String,
    pub owner_id: Option<i64>,
    pub owner: Option<PublicUser>,
}

impl RedirectRule {
    /// Whether this rule may be resolved without authentication.
    pub fn is_public(&self) -> bool {
        !self.is_private
    }
}

/// Input for inserting a redirect rule.
#[derive(Debug, Clone)]
pub struct NewRedirectRule {
    pub id: Uuid,
    pub redirect_url: String,
    pub is_private: bool,
    pub redirect_identifier: String,
    pub owner_id: Option<i64>,
}

/// Partial update for a redirect rule.
///
/// `None` fields keep their current value. `modified_at` is refreshed regardless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectRulePatch {
    pub redirect_url: Option<String>,
    pub is_private: Option<bool>,
}
