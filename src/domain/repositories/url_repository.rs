//! Repository trait for the canonical URL lookup table.

use crate::domain::entities::Allocation;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the canonical URL to identifier mapping.
///
/// Implementations own all synchronization: callers never lock, and both
/// operations are safe under concurrent use.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - Process-local table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Returns the entry for a canonical URL, allocating the next sequential
    /// identifier if the URL has never been seen.
    ///
    /// At most one identifier is ever allocated per canonical URL, even when
    /// several callers race on its first sighting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the table is unusable.
    async fn get_or_allocate(&self, canonical_url: &str) -> Result<Allocation, AppError>;

    /// Finds the canonical URL allocated to an identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the identifier has been allocated
    /// - `Ok(None)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the table is unusable.
    async fn find_by_id(&self, id: u64) -> Result<Option<String>, AppError>;

    /// Counts committed entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the table is unusable.
    async fn count(&self) -> Result<u64, AppError>;
}
