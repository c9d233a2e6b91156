//! Request spans for the HTTP surface.
//!
//! Each request gets one `request` span carrying the method, the matched route
//! template and the raw URI. The route template keeps span cardinality low:
//! `/url/{id}` instead of one value per rule id. The auth layer fills in
//! `user_id` once the access token has been resolved, so every event logged
//! below it is attributable to a caller.
//!
//! ```text
//! INFO request{method=GET route=/redirect/private/{identifier} uri=/redirect/private/aB3dE5gH7j user_id=7}: finished processing request latency=4 ms status=302
//! ```

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

/// Span field recorded by the auth layer.
pub const USER_ID_FIELD: &str = "user_id";

pub type HttpTraceLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, fn(&Request<Body>) -> Span>;

/// Tracing layer for the router. Responses are logged at `INFO` with latency in
/// milliseconds.
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as fn(&Request<Body>) -> Span)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn make_span(request: &Request<Body>) -> Span {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str);

    tracing::info_span!(
        "request",
        method = %request.method(),
        route,
        uri = %request.uri(),
        user_id = tracing::field::Empty,
    )
}
