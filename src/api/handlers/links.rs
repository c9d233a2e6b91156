//! Handlers for owner-scoped redirect rule management.
//!
//! Every route here sits behind [`crate::api::middleware::auth::layer`]. Rules
//! owned by another user are reported as `404`, exactly like missing ones.

use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::redirect_rule::{
    CreateRedirectRuleRequest, RedirectRuleResponse, UpdateRedirectRuleRequest,
};
use crate::api::extract::{JsonBody, parse_json};
use crate::api::middleware::auth::CurrentUser;
use crate::application::services::redirect_rule_service::RULE_NOT_FOUND;
use crate::domain::entities::RedirectRulePatch;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a redirect rule owned by the caller.
///
/// # Endpoint
///
/// `POST /url/`
///
/// # Request Body
///
/// ```json
/// { "redirect_url": "https://example.com/landing", "is_private": false }
/// ```
///
/// `is_private` is optional and defaults to `false`.
///
/// # Response
///
/// `201 Created` with the rule representation.
///
/// # Errors
///
/// - `400 Bad Request` - Malformed JSON, wrong field types, missing or invalid URL
/// - `401 Unauthorized` - Missing or invalid access token
pub async fn create_rule_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    JsonBody(payload): JsonBody<CreateRedirectRuleRequest>,
) -> Result<(StatusCode, Json<RedirectRuleResponse>), AppError> {
    payload.validate()?;

    let redirect_url = payload
        .redirect_url
        .map(|url| url.trim().to_string())
        .unwrap_or_default();

    let rule = state
        .redirect_rule_service
        .create(&user, redirect_url, payload.is_private.unwrap_or(false))
        .await?;

    Ok((StatusCode::CREATED, Json(rule.into())))
}

/// Lists the caller's rules.
///
/// # Endpoint
///
/// `GET /url/redirect_rules`
pub async fn list_rules_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<RedirectRuleResponse>>, AppError> {
    let rules = state.redirect_rule_service.list_by_owner(&user).await?;

    Ok(Json(rules.into_iter().map(Into::into).collect()))
}

/// Fetches one of the caller's rules.
///
/// # Endpoint
///
/// `GET /url/{id}`
///
/// # Errors
///
/// - `404 Not Found` - No such rule, owned by someone else, or `id` is not a UUID
pub async fn get_rule_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<RedirectRuleResponse>, AppError> {
    let id = parse_rule_id(&id)?;
    let rule = state.redirect_rule_service.get_by_id(id, &user).await?;

    Ok(Json(rule.into()))
}

/// Partially updates one of the caller's rules.
///
/// # Endpoint
///
/// `PATCH /url/{id}`
///
/// # Request Body
///
/// ```json
/// { "redirect_url": "https://new.example.com", "is_private": true }
/// ```
///
/// Both fields are optional; absent or `null` leaves the value unchanged.
/// Ownership is checked before the body is parsed, so a foreign id yields
/// `404` even with a malformed body.
///
/// # Errors
///
/// - `400 Bad Request` - Malformed JSON or invalid URL
/// - `404 Not Found` - No such rule or owned by someone else
pub async fn update_rule_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<RedirectRuleResponse>, AppError> {
    let id = parse_rule_id(&id)?;
    state.redirect_rule_service.get_by_id(id, &user).await?;

    let payload: UpdateRedirectRuleRequest = parse_json(&body)?;
    payload.validate()?;

    let rule = state
        .redirect_rule_service
        .update(id, &user, RedirectRulePatch::from(payload))
        .await?;

    Ok(Json(rule.into()))
}

/// Permanently deletes one of the caller's rules.
///
/// # Endpoint
///
/// `DELETE /url/{id}`
///
/// # Response
///
/// `204 No Content`
pub async fn delete_rule_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_rule_id(&id)?;
    state.redirect_rule_service.delete(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// A non-UUID id cannot name any rule.
fn parse_rule_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found(RULE_NOT_FOUND))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rule_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_rule_id(&id.to_string()).unwrap(), id);

        assert!(matches!(
            parse_rule_id("123"),
            Err(AppError::NotFound { ref message }) if message == RULE_NOT_FOUND
        ));
    }
}
