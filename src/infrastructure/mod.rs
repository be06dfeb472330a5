//! Infrastructure layer for storage.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementations

pub mod persistence;
