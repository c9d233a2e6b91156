//! API route configuration.

use crate::api::handlers::{
    create_rule_handler, delete_rule_handler, get_rule_handler, health_handler,
    list_rules_handler, private_redirect_handler, public_redirect_handler,
    retrieve_token_handler, update_rule_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes requiring an access token, see [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `POST   /url`                            - Create a rule
/// - `GET    /url/redirect_rules`             - List the caller's rules
/// - `GET    /url/{id}`                       - Fetch one of the caller's rules
/// - `PATCH  /url/{id}`                       - Partially update a rule
/// - `DELETE /url/{id}`                       - Delete a rule
/// - `GET    /redirect/private/{identifier}`  - Resolve any rule
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(create_rule_handler))
        .route("/url/redirect_rules", get(list_rules_handler))
        .route(
            "/url/{id}",
            get(get_rule_handler)
                .patch(update_rule_handler)
                .delete(delete_rule_handler),
        )
        .route(
            "/redirect/private/{identifier}",
            get(private_redirect_handler),
        )
}

/// Unauthenticated routes.
///
/// # Endpoints
///
/// - `POST /retrieve-token`                - Log in
/// - `GET  /redirect/public/{identifier}`  - Resolve a public rule
/// - `GET  /health`                        - Health check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/retrieve-token", post(retrieve_token_handler))
        .route(
            "/redirect/public/{identifier}",
            get(public_redirect_handler),
        )
        .route("/health", get(health_handler))
}
