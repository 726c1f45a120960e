//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Public Origin
//!
//! Short URLs are built as `{base_url}/{code}`. The base URL is chosen by
//! priority:
//!
//! 1. `BASE_URL` - explicit origin, e.g. `https://sho.rt`
//! 2. `PUBLIC_DOMAINS` - comma-separated deployment hostnames; the first
//!    one becomes `https://{domain}`
//! 3. `http://localhost:{port}` using the port from `LISTEN`
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use url::Url;

const DEFAULT_LISTEN: &str = "0.0.0.0:5000";
const DEFAULT_PORT: u16 = 5000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public origin prepended to short codes, without a trailing `/`.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let base_url = resolve_base_url(
            env::var("BASE_URL").ok(),
            env::var("PUBLIC_DOMAINS").ok(),
            &listen_addr,
        );

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a `host:port` socket address
    /// - `base_url` is not an absolute `http`/`https` URL
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        self.listen_addr
            .parse::<SocketAddr>()
            .with_context(|| {
                format!(
                    "LISTEN must be in format 'host:port', got '{}'",
                    self.listen_addr
                )
            })?;

        let base = Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL is not a valid URL: '{}'", self.base_url))?;
        if !matches!(base.scheme(), "http" | "https") || base.host_str().is_none() {
            anyhow::bail!(
                "BASE_URL must be an http(s) origin, got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Picks the public origin for short URLs. See the module docs for priority.
fn resolve_base_url(
    base_url: Option<String>,
    public_domains: Option<String>,
    listen_addr: &str,
) -> String {
    if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
        return url.trim().trim_end_matches('/').to_string();
    }

    let deployment_domain = public_domains.as_deref().and_then(|domains| {
        domains
            .split(',')
            .map(str::trim)
            .find(|d| !d.is_empty())
            .map(str::to_string)
    });

    if let Some(domain) = deployment_domain {
        return format!("https://{}", domain.trim_end_matches('/'));
    }

    let port = listen_addr
        .rsplit_once(':')
        .and_then(|(_, port)| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    format!("http://localhost:{port}")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
