//! DTOs for the shorten and inflate endpoints.

use serde::{Deserialize, Serialize};

/// Query string of `POST /shorten`.
///
/// `url` is optional so that a missing parameter reaches the service and is
/// reported with the same message as a blank one.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenQuery {
    pub url: Option<String>,
}

/// Body of a `400 Bad Request` carrying a validation message.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}
