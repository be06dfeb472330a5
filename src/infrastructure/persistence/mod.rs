//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryUrlRepository`] - Process-local canonical URL lookup table

pub mod in_memory_url_repository;

pub use in_memory_url_repository::InMemoryUrlRepository;
