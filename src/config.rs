//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `PORT` - Listen port, also used in generated short links (default: `8080`)
//! - `HOST` - Bind interface (default: `0.0.0.0`)
//! - `PUBLIC_HOST` - Host name used in short links (default: `localhost`)
//! - `BASE_URL` - Full short link prefix; overrides `PUBLIC_HOST`/`PORT`
//!   (default: `http://<PUBLIC_HOST>:<PORT>`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `LOG_ENDPOINT` - Remote log collector URL; empty disables shipping
//!   (default: [`DEFAULT_LOG_ENDPOINT`])
//! - `LOG_QUEUE_CAPACITY` - Pending remote log events (default: 1024, min: 16)
//! - `LOG_TIMEOUT_MS` - Per-event delivery timeout (default: 5000)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Collector that receives remote log events unless `LOG_ENDPOINT` says otherwise.
pub const DEFAULT_LOG_ENDPOINT: &str = "http://20.244.56.144/evaluation-service/logs";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Prefix of every short link, without trailing slash.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// `None` disables remote log shipping.
    pub log_endpoint: Option<String>,
    pub log_queue_capacity: usize,
    pub log_timeout_ms: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{value}'"))?,
            Err(_) => 8080,
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let base_url = Self::load_base_url(port);
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let log_endpoint = Self::load_log_endpoint();

        let log_queue_capacity = env::var("LOG_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1024);

        let log_timeout_ms = env::var("LOG_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        Ok(Self {
            host,
            port,
            base_url,
            log_level,
            log_format,
            log_endpoint,
            log_queue_capacity,
            log_timeout_ms,
        })
    }

    /// Loads the short link prefix.
    ///
    /// Priority:
    /// 1. `BASE_URL` environment variable
    /// 2. Constructed from `PUBLIC_HOST` and the listen port
    fn load_base_url(port: u16) -> String {
        if let Ok(url) = env::var("BASE_URL") {
            return url.trim_end_matches('/').to_string();
        }

        let host = env::var("PUBLIC_HOST").unwrap_or_else(|_| "localhost".to_string());
        format!("http://{}:{}", host, port)
    }

    /// Loads the collector URL. An explicitly empty `LOG_ENDPOINT` disables shipping.
    fn load_log_endpoint() -> Option<String> {
        match env::var("LOG_ENDPOINT") {
            Ok(url) if url.trim().is_empty() => None,
            Ok(url) => Some(url),
            Err(_) => Some(DEFAULT_LOG_ENDPOINT.to_string()),
        }
    }

    /// Socket address to bind, as `host:port`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Delivery timeout for one remote log event.
    pub fn log_timeout(&self) -> Duration {
        Duration::from_millis(self.log_timeout_ms)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `base_url` or `log_endpoint` is not an HTTP(S) URL
    /// - `log_queue_capacity` is outside 16..=1_000_000
    /// - `log_timeout_ms` is 0
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !is_http_url(&self.base_url) {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if let Some(ref endpoint) = self.log_endpoint
            && !is_http_url(endpoint)
        {
            anyhow::bail!(
                "LOG_ENDPOINT must start with 'http://' or 'https://', got '{}'",
                endpoint
            );
        }

        if self.log_queue_capacity < 16 {
            anyhow::bail!(
                "LOG_QUEUE_CAPACITY must be at least 16, got {}",
                self.log_queue_capacity
            );
        }

        if self.log_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "LOG_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.log_queue_capacity
            );
        }

        if self.log_timeout_ms == 0 {
            anyhow::bail!("LOG_TIMEOUT_MS must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether log events are shipped to a remote collector.
    pub fn is_remote_logging_enabled(&self) -> bool {
        self.log_endpoint.is_some()
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Short link base: {}", self.base_url);

        if let Some(ref endpoint) = self.log_endpoint {
            tracing::info!("  Remote logging: {} (enabled)", endpoint);
        } else {
            tracing::info!("  Remote logging: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Log queue capacity: {}", self.log_queue_capacity);
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
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
