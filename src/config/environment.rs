// ABOUTME: Environment-based configuration for server and upstream providers
// ABOUTME: Typed config structs with from_env loading and a loggable summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server configuration loaded from environment variables
//!
//! Environment-only configuration: every knob has a sensible default, so the
//! server runs with no setup while staying overridable per deployment.

use anyhow::{Context, Result};
use std::env;
use tracing::info;

/// Default HTTP port for the API server
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default per-request timeout for upstream calls, in seconds
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Default weather cache TTL, in seconds
const DEFAULT_WEATHER_CACHE_TTL_SECS: u64 = 600;

/// Open-Meteo forecast endpoint
const DEFAULT_OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Open-Meteo geocoding endpoint
const DEFAULT_GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Weather provider configuration
#[derive(Debug, Clone)]
pub struct OpenMeteoConfig {
    /// Base URL for the Open-Meteo forecast API
    pub base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_seconds: u64,
    /// How long fetched readings stay cached, in seconds
    pub cache_ttl_seconds: u64,
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OPEN_METEO_BASE_URL.into(),
            request_timeout_seconds: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            cache_ttl_seconds: DEFAULT_WEATHER_CACHE_TTL_SECS,
        }
    }
}

/// Geocoding provider configuration
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    /// Base URL for the Open-Meteo geocoding API
    pub base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_seconds: u64,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEOCODING_BASE_URL.into(),
            request_timeout_seconds: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port for the API server
    pub http_port: u16,
    /// Weather provider configuration
    pub weather: OpenMeteoConfig,
    /// Geocoding provider configuration
    pub geocoding: GeocodingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            weather: OpenMeteoConfig::default(),
            geocoding: GeocodingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but unparseable
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
            .parse()
            .context("Invalid HTTP_PORT value")?;

        let weather = OpenMeteoConfig {
            base_url: env_var_or("OPEN_METEO_BASE_URL", DEFAULT_OPEN_METEO_BASE_URL),
            request_timeout_seconds: env_var_or(
                "OPEN_METEO_TIMEOUT_SECS",
                &DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid OPEN_METEO_TIMEOUT_SECS value")?,
            cache_ttl_seconds: env_var_or(
                "WEATHER_CACHE_TTL_SECS",
                &DEFAULT_WEATHER_CACHE_TTL_SECS.to_string(),
            )
            .parse()
            .context("Invalid WEATHER_CACHE_TTL_SECS value")?,
        };

        let geocoding = GeocodingConfig {
            base_url: env_var_or("GEOCODING_BASE_URL", DEFAULT_GEOCODING_BASE_URL),
            request_timeout_seconds: env_var_or(
                "GEOCODING_TIMEOUT_SECS",
                &DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid GEOCODING_TIMEOUT_SECS value")?,
        };

        Ok(Self {
            http_port,
            weather,
            geocoding,
        })
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Mitten Index Server Configuration:\n\
             - HTTP Port: {}\n\
             - Weather Provider: {}\n\
             - Geocoding Provider: {}\n\
             - Upstream Timeout: {}s\n\
             - Weather Cache TTL: {}s",
            self.http_port,
            self.weather.base_url,
            self.geocoding.base_url,
            self.weather.request_timeout_seconds,
            self.weather.cache_ttl_seconds,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_complete() {
        let config = ServerConfig::default();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.weather.request_timeout_seconds, 10);
        assert!(config.weather.base_url.contains("api.open-meteo.com"));
        assert!(config.geocoding.base_url.contains("geocoding-api"));
    }

    #[test]
    fn test_summary_mentions_providers() {
        let summary = ServerConfig::default().summary();
        assert!(summary.contains("HTTP Port: 8080"));
        assert!(summary.contains("open-meteo.com"));
    }
}
