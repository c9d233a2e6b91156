//! Access token authentication middleware.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use super::tracing::USER_ID_FIELD;
use crate::domain::entities::User;
use crate::{error::AppError, state::AppState};

/// Returned when the `Authorization` header is missing or malformed.
pub const MALFORMED_HEADER_MESSAGE: &str = "Authorization header must start with Bearer or Token";

/// The authenticated caller, inserted into request extensions by [`layer`].
///
/// Handlers behind the middleware extract it with
/// `Extension(CurrentUser(user)): Extension<CurrentUser>`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Authenticates requests using access tokens from the `Authorization` header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// Authorization: Token <token>
/// ```
///
/// Both prefixes are treated identically.
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Verify signature, expiry and that it is an access token
/// 3. Load the user named by the token
/// 4. Record `user_id` on the request span
/// 5. Insert [`CurrentUser`] and continue to the handler
///
/// # Errors
///
/// Returns `401 Unauthorized` with a cause-specific message if:
/// - Authorization header is missing or has another scheme
/// - Token is expired, invalid, or a refresh token
/// - The user no longer exists
///
/// Store failures surface as `500`, never `401`.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/url/redirect_rules", get(list_rules_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(req.headers())
        .inspect_err(|_| tracing::debug!("Rejected request without usable Authorization header"))?
        .to_owned();

    let user = st
        .auth_service
        .resolve_access_token(&token)
        .await
        .inspect_err(|e| {
            if matches!(e, AppError::Unauthorized { .. }) {
                tracing::debug!(reason = %e, "Access token rejected");
            }
        })?;

    tracing::Span::current().record(USER_ID_FIELD, user.id);
    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

/// Pulls the raw token out of `Authorization: Bearer|Token <token>`.
fn extract_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| {
            value
                .strip_prefix("Bearer ")
                .or_else(|| value.strip_prefix("Token "))
        })
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::unauthorized(MALFORMED_HEADER_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_accepts_both_prefixes() {
        assert_eq!(extract_token(&headers("Bearer abc.def")).unwrap(), "abc.def");
        assert_eq!(extract_token(&headers("Token abc.def")).unwrap(), "abc.def");
    }

    #[test]
    fn test_rejects_other_schemes_and_empty_tokens() {
        for value in ["Basic dXNlcjpwdw==", "Bearer ", "Token   ", "bearer abc", "abc"] {
            let err = extract_token(&headers(value)).unwrap_err();
            assert!(
                matches!(err, AppError::Unauthorized { ref message } if message == MALFORMED_HEADER_MESSAGE),
                "accepted {value:?}"
            );
        }
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            extract_token(&HeaderMap::new()),
            Err(AppError::Unauthorized { .. })
        ));
    }
}
