//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`          - Health check (lookup table status)
//! - `POST /shorten?url=...` - Shorten a URL
//! - `GET  /{code}`          - Inflate a short code
//! - `/api/*`                - Same shortener routes under a URL prefix
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(routes(state))
}

/// Routes and request tracing, without path normalization.
///
/// `/health` takes precedence over the `/{code}` capture at the root; the
/// code `health` is still reachable as `/api/health`.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::shortener_routes())
        .nest("/api", api::routes::shortener_routes())
        .with_state(state)
        .layer(tracing::layer())
}
