//! API route configuration.

use crate::api::handlers::{inflate_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shortener routes, mounted both at the root and under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten?url=<raw>` - Shorten a URL
/// - `GET  /{code}`            - Inflate a short code
pub fn shortener_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/{code}", get(inflate_handler))
}
