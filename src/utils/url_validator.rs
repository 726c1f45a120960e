//! Absolute URL validation.
//!
//! The submitted string is checked, never rewritten: the stored original
//! URL is exactly what the client sent.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must include a host")]
    MissingHost,
}

/// Validates that `input` is an absolute URL with a scheme and a host.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] if the string does not parse.
/// Returns [`UrlValidationError::MissingHost`] for host-less URLs such as
/// `mailto:` or `data:`.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_original_url("https://example.com/page").is_ok());
/// assert!(validate_original_url("not-a-url").is_err());
/// ```
pub fn validate_original_url(input: &str) -> Result<Url, UrlValidationError> {
    // The parser silently strips tabs and newlines; the stored string keeps them.
    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidFormat(
            "control characters are not allowed".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::MissingHost),
    }
}
