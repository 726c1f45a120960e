//! Utility functions for code generation and URL handling.
//!
//! - [`code_generator`] - Short code generation and reserved path policy
//! - [`url_validator`] - Absolute URL validation

pub mod code_generator;
pub mod url_validator;
