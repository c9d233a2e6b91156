//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /retrieve-token/`                  - Login (public)
//! - `GET  /redirect/public/{identifier}`     - Public resolution (public)
//! - `GET  /health`                           - Health check (public)
//! - `/url/*`, `/redirect/private/*`          - Access token required
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Access token, applied per protected route
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application without path normalization.
pub fn router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/url/` and `/url` are the
/// same endpoint.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
