//! Application layer services.
//!
//! Services coordinate repository calls, validation and the retry policy,
//! and expose a small API to the HTTP handlers.
//!
//! - [`services::shortener_service::ShortenerService`] - Shortening, resolution and listing

pub mod services;
