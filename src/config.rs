//! Configuration Module
//!
//! Handles loading and managing relay configuration from environment variables.

use std::env;

/// Default location of the remote filename -> URL mapping document.
const DEFAULT_MAPPING_URL: &str =
    "https://raw.githubusercontent.com/wobuhui666/1111/refs/heads/main/urls.json";

/// Default location of the auxiliary document served by direct proxy.
const DEFAULT_DOCUMENT_URL: &str =
    "https://raw.githubusercontent.com/wobuhui666/1111/refs/heads/main/leanback.json";

/// Relay configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the remote mapping table (filename -> download URL)
    pub mapping_url: String,
    /// URL of the auxiliary JSON document
    pub document_url: String,
    /// How long a fetched mapping table stays fresh, in seconds
    pub cache_duration: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAPPING_URL` - Remote mapping table location
    /// - `DOCUMENT_URL` - Auxiliary document location
    /// - `CACHE_DURATION` - Mapping freshness window in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            mapping_url: env::var("MAPPING_URL").unwrap_or_else(|_| DEFAULT_MAPPING_URL.into()),
            document_url: env::var("DOCUMENT_URL").unwrap_or_else(|_| DEFAULT_DOCUMENT_URL.into()),
            cache_duration: env::var("CACHE_DURATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mapping_url: DEFAULT_MAPPING_URL.to_string(),
            document_url: DEFAULT_DOCUMENT_URL.to_string(),
            cache_duration: 300,
            server_port: 3000,
        }
    }
}
