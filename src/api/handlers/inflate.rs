//! Handler for short code inflation.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::api::handlers::respond;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the canonical URL a short code was created for.
///
/// # Endpoint
///
/// `GET /{code}` (also mounted as `GET /api/{code}`)
///
/// # Response Codes
///
/// - **200 OK**: Body is the canonical URL as a JSON string
/// - **400 Bad Request**: Blank code, body `{"message": "Must provide an ID."}`
/// - **404 Not Found**: Unknown code, empty body
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the lookup table is unusable.
pub async fn inflate_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let result = state.shortener_service.inflate(Some(code.as_str())).await?;

    Ok(respond::inflate_response(result))
}
