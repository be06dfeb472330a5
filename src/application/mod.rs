//! Application layer services implementing business logic.
//!
//! Services orchestrate validation, canonicalization and repository calls,
//! providing a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Shortening and inflation

pub mod services;
