//! HTTP route handlers for the dashboards.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Liveness
//! GET  /health/ready             - Readiness (database reachable)
//!
//! # Dashboards
//! GET  /dashboard?role=<role>    - Redirect to the role's dashboard
//! GET  /dashboard/affiliate      - Affiliate partner dashboard
//! GET  /dashboard/super-admin    - Super-admin dashboard
//! ```

pub mod dashboard;
pub mod health;

use axum::{Router, routing::get};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::state::AppState;

/// Build the router (without state or tracing layers).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/dashboard", get(dashboard::for_role))
        .route("/dashboard/affiliate", get(dashboard::affiliate))
        .route("/dashboard/super-admin", get(dashboard::super_admin))
}

/// Build the full application: routes, request tracing and state.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
