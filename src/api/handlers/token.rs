//! Handler for the login endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::token::{LoginRequest, LoginResponse};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges a username and password for an access/refresh token pair.
///
/// # Endpoint
///
/// `POST /retrieve-token/`
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "s3cret" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "access": "eyJ...",
///   "refresh": "eyJ...",
///   "username": "alice",
///   "user_id": 1
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` - Body is not JSON, or a field is missing/empty
/// - `401 Unauthorized` - Unknown user or wrong password (indistinguishable)
pub async fn retrieve_token_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let username = payload.username.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let (user, pair) = state.auth_service.login(&username, &password).await?;

    Ok(Json(LoginResponse {
        access: pair.access.token,
        refresh: pair.refresh.token,
        username: user.username,
        user_id: user.id,
    }))
}
