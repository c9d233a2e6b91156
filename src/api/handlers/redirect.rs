//! Handlers resolving redirect identifiers.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::redirect_rule::RedirectRuleResponse;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a public rule for anonymous callers.
///
/// # Endpoint
///
/// `GET /redirect/public/{identifier}`
///
/// # Response
///
/// `302 Found` with the rule representation as a JSON body. No `Location`
/// header is set; clients read `redirect_url` from the body.
///
/// # Errors
///
/// - `404 Not Found` - No such identifier, or the rule is private
pub async fn public_redirect_handler(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<(StatusCode, Json<RedirectRuleResponse>), AppError> {
    let rule = state
        .redirect_rule_service
        .resolve_public(&identifier)
        .await?;

    tracing::debug!(identifier = %identifier, "Resolved public redirect");

    Ok((StatusCode::FOUND, Json(rule.into())))
}

/// Resolves any rule, public or private, for an authenticated caller.
///
/// # Endpoint
///
/// `GET /redirect/private/{identifier}`
///
/// Ownership is not checked: any authenticated user may resolve any rule.
pub async fn private_redirect_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(identifier): Path<String>,
) -> Result<(StatusCode, Json<RedirectRuleResponse>), AppError> {
    let rule = state
        .redirect_rule_service
        .resolve_private(&identifier)
        .await?;

    tracing::debug!(identifier = %identifier, user_id = user.id, "Resolved private redirect");

    Ok((StatusCode::FOUND, Json(rule.into())))
}
