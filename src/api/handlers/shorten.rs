//! Handler for link shortening endpoint.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, Uri},
    response::Response,
};
use tracing::debug;

use crate::api::dto::shorten::ShortenQuery;
use crate::api::handlers::respond;
use crate::application::services::shortener_service::URL_INVALID_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::{resolve_base_url, short_url};

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten?url=<raw>` (also mounted as `POST /api/shorten`)
///
/// The short URL points back at the inflate route: `{base_url}/{code}`, where
/// the base is the configured `BASE_URL` or `http://{host}` taken from the
/// `Host` header or, failing that, the request URI authority.
///
/// # Response Codes
///
/// - **200 OK**: Body is the short URL as a JSON string
/// - **400 Bad Request**: Invalid or missing URL, or a query string that
///   cannot be parsed (e.g. `url` given twice), body `{"message": "..."}`
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the base URL cannot be derived from
/// the request. Returns [`AppError::Internal`] if the lookup table is unusable
/// or the service reports a status this endpoint cannot produce.
pub async fn shorten_handler(
    State(state): State<AppState>,
    query: Result<Query<ShortenQuery>, QueryRejection>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            debug!(reason = %rejection, "Rejected shorten query string");
            return Ok(respond::bad_request(Some(URL_INVALID_MESSAGE.to_string())));
        }
    };

    let base = resolve_base_url(state.base_url.as_deref(), &headers, &uri)?;

    let result = state
        .shortener_service
        .shorten(query.url.as_deref(), |code| short_url(&base, code))
        .await?;

    respond::shorten_response(result)
}
