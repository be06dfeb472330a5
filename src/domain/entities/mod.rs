//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`UrlEntry`] - A canonical URL and its sequential identifier
//! - [`Allocation`] - Whether a lookup found or created an entry

pub mod url_entry;

pub use url_entry::{Allocation, UrlEntry};
