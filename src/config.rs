//! Configuration Module
//!
//! Handles loading service configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Output format for the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL; the in-memory backend is used when unset
    pub redis_url: Option<String>,
    /// HTTP server port
    pub server_port: u16,
    /// Capacity of the in-memory backend
    pub max_entries: usize,
    /// In-memory cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Log output format
    pub log_format: LogFormat,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Redis URL (default: unset, in-memory backend)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `MAX_ENTRIES` - In-memory cache capacity (default: 10000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    /// - `LOG_FORMAT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            redis_url: env::var("REDIS_URL")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            cleanup_interval: parse_var::<u64>("CLEANUP_INTERVAL")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.cleanup_interval),
            log_format: parse_var("LOG_FORMAT").unwrap_or(defaults.log_format),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: None,
            server_port: 8080,
            max_entries: 10_000,
            cleanup_interval: 1,
            log_format: LogFormat::Text,
        }
    }
}
