//! Utility functions for short code encoding, URL processing, and request handling.
//!
//! - [`numeral_codec`] - Base-36 identifier to short code codec
//! - [`url_canonicalizer`] - URL validation and canonicalization
//! - [`base_url`] - Public base URL resolution for short links

pub mod base_url;
pub mod numeral_codec;
pub mod url_canonicalizer;
