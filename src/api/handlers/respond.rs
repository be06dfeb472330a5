//! Translation of shortener results into HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::api::dto::shorten::MessageBody;
use crate::domain::outcome::{OperationResult, OperationStatus};
use crate::error::AppError;

/// `200 OK` with the result message as a JSON string body.
pub(crate) fn ok(message: Option<String>) -> Response {
    (StatusCode::OK, Json(message)).into_response()
}

/// `400 Bad Request`, with a body only if a message was set.
pub(crate) fn bad_request(message: Option<String>) -> Response {
    match message {
        Some(message) => (StatusCode::BAD_REQUEST, Json(MessageBody { message })).into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

/// `404 Not Found` with an empty body.
pub(crate) fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}

/// Maps a shorten result to its response.
///
/// Shortening never reports not-found; if it does, the request fails with
/// [`AppError::Internal`] instead of guessing a status code.
pub(crate) fn shorten_response(result: OperationResult) -> Result<Response, AppError> {
    match result.status {
        OperationStatus::Success => Ok(ok(result.message)),
        OperationStatus::InvalidInput => Ok(bad_request(result.message)),
        status => {
            error!(%status, "Unhandled status returned by shortener");
            Err(AppError::internal(
                "Unhandled status returned by shortener",
                json!({ "status": status.as_str() }),
            ))
        }
    }
}

/// Maps an inflate result to its response.
pub(crate) fn inflate_response(result: OperationResult) -> Response {
    match result.status {
        OperationStatus::Success => ok(result.message),
        OperationStatus::InvalidInput => bad_request(result.message),
        OperationStatus::NotFound => not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_status() {
        assert_eq!(ok(Some("http://nintex.com/".into())).status(), StatusCode::OK);
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(bad_request(None).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            bad_request(Some("Must provide a URL.".into())).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(not_found().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_shorten_response_success() {
        let response = shorten_response(OperationResult::success("http://s.example.com/a")).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_shorten_response_invalid_input() {
        let response =
            shorten_response(OperationResult::invalid_input("Must provide a URL.")).unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_shorten_response_not_found_is_internal_error() {
        let err = shorten_response(OperationResult::not_found()).unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_error_info().details["status"], "not_found");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_inflate_response_statuses() {
        assert_eq!(
            inflate_response(OperationResult::success("http://nintex.com/")).status(),
            StatusCode::OK
        );
        assert_eq!(
            inflate_response(OperationResult::invalid_input("Must provide an ID.")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            inflate_response(OperationResult::not_found()).status(),
            StatusCode::NOT_FOUND
        );
    }
}
