//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored original URL to short code association
//! - [`NewUrlMapping`] - Input for creating a mapping

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
