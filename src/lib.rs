//! # URL Shortener
//!
//! An in-memory URL shortening service built with Axum.
//!
//! Long URLs are canonicalized, given a dense sequential identifier on first
//! sight, and exposed as the base-36 encoding of that identifier. Inflating a
//! short code reverses the mapping.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, result types and repository traits
//! - **Application Layer** ([`application`]) - Validation, canonicalization and orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - The process-local lookup table
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Storage
//!
//! The lookup table is volatile: it starts empty on every process start, is
//! never evicted, and is lost on restart.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: fix the public base URL of short links
//! export BASE_URL="https://s.example.com"
//!
//! # Start the service
//! cargo run
//!
//! curl -X POST 'http://localhost:3000/shorten?url=nintex.com'
//! # "https://s.example.com/a"
//! curl 'http://localhost:3000/a'
//! # "http://nintex.com/"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{Allocation, UrlEntry};
    pub use crate::domain::outcome::{OperationResult, OperationStatus};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUrlRepository;
    pub use crate::state::AppState;
}
