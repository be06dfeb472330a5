//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::InMemoryUrlRepository;

/// Service type backed by the process-local lookup table.
pub type InMemoryShortenerService = ShortenerService<InMemoryUrlRepository>;

/// Application state shared across handlers.
///
/// Cloning is cheap: the service, and therefore the lookup table, is shared
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<InMemoryShortenerService>,
    /// Public base URL for short links. Derived from the `Host` header when `None`.
    pub base_url: Option<String>,
}

impl AppState {
    /// Creates state around an empty lookup table.
    pub fn new(base_url: Option<String>) -> Self {
        let url_repository = Arc::new(InMemoryUrlRepository::new());

        Self {
            shortener_service: Arc::new(ShortenerService::new(url_repository)),
            base_url,
        }
    }
}
