//! DTOs for redirect rule endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{PublicUser, RedirectRule, RedirectRulePatch};
use crate::utils::url_validator::validate_redirect_url;

/// Request body for `POST /url/`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRedirectRuleRequest {
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_redirect_url")
    )]
    pub redirect_url: Option<String>,

    /// Defaults to `false`.
    pub is_private: Option<bool>,
}

/// Request body for `PATCH /url/{id}`.
///
/// Absent and `null` fields are both left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRedirectRuleRequest {
    #[validate(custom(function = "validate_redirect_url"))]
    pub redirect_url: Option<String>,

    pub is_private: Option<bool>,
}

impl From<UpdateRedirectRuleRequest> for RedirectRulePatch {
    fn from(req: UpdateRedirectRuleRequest) -> Self {
        RedirectRulePatch {
            redirect_url: req.redirect_url.map(|url| url.trim().to_string()),
            is_private: req.is_private,
        }
    }
}

/// Public representation of a rule.
///
/// `user` is the owner's public fields, or `null` for an ownerless rule.
#[derive(Debug, Serialize)]
pub struct RedirectRuleResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub redirect_url: String,
    pub is_private: bool,
    pub redirect_identifier: String,
    pub user: Option<PublicUser>,
}

impl From<RedirectRule> for RedirectRuleResponse {
    fn from(rule: RedirectRule) -> Self {
        Self {
            id: rule.id,
            created_at: rule.created_at,
            modified_at: rule.modified_at,
            redirect_url: rule.redirect_url,
            is_private: rule.is_private,
            redirect_identifier: rule.redirect_identifier,
            user: rule.owner,
        }
    }
}
