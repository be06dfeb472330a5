//! URL shortening and inflation service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::outcome::OperationResult;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::numeral_codec;
use crate::utils::url_canonicalizer::canonicalize;

/// Message returned when no URL is supplied to shorten.
pub const URL_MISSING_MESSAGE: &str = "Must provide a URL.";

/// Message returned when the supplied URL cannot be canonicalized.
pub const URL_INVALID_MESSAGE: &str = "URL provided is not valid.";

/// Message returned when no short code is supplied to inflate.
pub const ID_MISSING_MESSAGE: &str = "Must provide an ID.";

/// Service for shortening URLs into sequential short codes and back.
///
/// Canonically equal URLs always share one identifier, so shortening is
/// idempotent regardless of call order or concurrency.
pub struct ShortenerService<R: UrlRepository> {
    url_repository: Arc<R>,
}

impl<R: UrlRepository> ShortenerService<R> {
    /// Creates a new shortener service.
    pub fn new(url_repository: Arc<R>) -> Self {
        Self { url_repository }
    }

    /// Shortens a raw URL.
    ///
    /// `build_short_url` turns the generated short code into the fully
    /// qualified short URL returned to the caller.
    ///
    /// # Validation
    ///
    /// 1. Missing or blank input: invalid input, [`URL_MISSING_MESSAGE`]
    /// 2. Input that cannot be canonicalized (digits only, unparsable, not
    ///    well formed): invalid input, [`URL_INVALID_MESSAGE`]
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the repository fails.
    pub async fn shorten<F>(
        &self,
        raw_url: Option<&str>,
        build_short_url: F,
    ) -> Result<OperationResult, AppError>
    where
        F: FnOnce(&str) -> String,
    {
        let result = self.shorten_inner(raw_url, build_short_url).await?;

        metrics::counter!("shortener_shorten_total", "status" => result.status.as_str())
            .increment(1);

        Ok(result)
    }

    async fn shorten_inner<F>(
        &self,
        raw_url: Option<&str>,
        build_short_url: F,
    ) -> Result<OperationResult, AppError>
    where
        F: FnOnce(&str) -> String,
    {
        let Some(raw_url) = raw_url.filter(|u| !u.trim().is_empty()) else {
            return Ok(OperationResult::invalid_input(URL_MISSING_MESSAGE));
        };

        let canonical_url = match canonicalize(raw_url) {
            Ok(url) => url,
            Err(e) => {
                debug!(raw_url, reason = %e, "Rejected URL");
                return Ok(OperationResult::invalid_input(URL_INVALID_MESSAGE));
            }
        };

        let allocation = self
            .url_repository
            .get_or_allocate(&canonical_url)
            .await?;

        if allocation.is_created() {
            info!(
                id = allocation.entry().id,
                url = %canonical_url,
                "Allocated new short code"
            );
        }

        let code = allocation.entry().code();

        Ok(OperationResult::success(build_short_url(&code)))
    }

    /// Inflates a short code back into the canonical URL it was created for.
    ///
    /// Codes containing characters outside the short code alphabet, or too
    /// long to be an identifier, are reported as not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the repository fails.
    pub async fn inflate(&self, code: Option<&str>) -> Result<OperationResult, AppError> {
        let result = self.inflate_inner(code).await?;

        metrics::counter!("shortener_inflate_total", "status" => result.status.as_str())
            .increment(1);

        Ok(result)
    }

    async fn inflate_inner(&self, code: Option<&str>) -> Result<OperationResult, AppError> {
        let Some(code) = code.filter(|c| !c.trim().is_empty()) else {
            return Ok(OperationResult::invalid_input(ID_MISSING_MESSAGE));
        };

        let id = match numeral_codec::decode(code) {
            Ok(id) => id,
            Err(e) => {
                debug!(code, reason = %e, "Undecodable short code");
                return Ok(OperationResult::not_found());
            }
        };

        match self.url_repository.find_by_id(id).await? {
            Some(url) => Ok(OperationResult::success(url)),
            None => Ok(OperationResult::not_found()),
        }
    }

    /// Returns the number of distinct canonical URLs shortened so far.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the repository fails.
    pub async fn url_count(&self) -> Result<u64, AppError> {
        self.url_repository.count().await
    }
}
