//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`outcome`] - Tagged result of shortener operations
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; business logic lives in [`crate::application::services`].

pub mod entities;
pub mod outcome;
pub mod repositories;
