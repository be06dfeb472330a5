//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod inflate;
mod respond;
pub mod shorten;

pub use health::health_handler;
pub use inflate::inflate_handler;
pub use shorten::shorten_handler;
