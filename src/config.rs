//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_TTL_SECS;

/// Default upstream catalog endpoint
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://boardgamegeek.com/xmlapi2";

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime in seconds of cached search and detail responses
    pub cache_ttl: u64,
    /// Base URL of the catalog XML API
    pub catalog_base_url: String,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
    /// Bearer token for the catalog API, if it requires one
    pub catalog_api_token: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL` - Cache lifetime in seconds (default: 3600)
    /// - `CATALOG_BASE_URL` - Catalog API base URL (default: BoardGameGeek XML API 2)
    /// - `UPSTREAM_TIMEOUT` - Upstream request timeout in seconds (default: 5)
    /// - `CATALOG_API_TOKEN` - Optional bearer token
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            catalog_base_url: env::var("CATALOG_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.catalog_base_url),
            upstream_timeout: env::var("UPSTREAM_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.upstream_timeout),
            catalog_api_token: env::var("CATALOG_API_TOKEN")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl: DEFAULT_TTL_SECS,
            catalog_base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            upstream_timeout: 5,
            catalog_api_token: None,
        }
    }
}
