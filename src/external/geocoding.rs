// ABOUTME: Open-Meteo geocoding client resolving place names and US ZIP codes
// ABOUTME: Translates search responses into coordinates for the weather pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Open-Meteo geocoding client
//!
//! Resolves free-text place names and US ZIP codes to coordinates. A missing
//! match is a first-class `Ok(None)`, not an error: the route layer decides
//! that it maps to a 404.
//!
//! # API Reference
//! Open-Meteo geocoding API: <https://open-meteo.com/en/docs/geocoding-api>

use crate::config::environment::GeocodingConfig;
use crate::errors::{AppError, AppResult};
use crate::models::Coordinates;
use crate::utils::http_client::create_client_with_timeout;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Minimum digits for a usable US ZIP code
const MIN_ZIP_DIGITS: usize = 5;

/// Matcher for 5-digit (optionally ZIP+4) US ZIP codes
fn zip_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{5}(-\d{4})?$").unwrap_or_else(|_| unreachable!()))
}

/// Check whether a query looks like a US ZIP code
#[must_use]
pub fn is_us_zip(query: &str) -> bool {
    zip_pattern().is_match(query.trim())
}

/// Check whether a query is ZIP-shaped enough to belong on the ZIP path,
/// even when it is too short to be valid
fn looks_numeric(query: &str) -> bool {
    let trimmed = query.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit() || c == '-')
}

/// A geocoding match from the upstream provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodedLocation {
    /// Place name as reported by the provider
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Country name
    pub country: Option<String>,
    /// State or province, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin1: Option<String>,
}

impl GeocodedLocation {
    /// The match's coordinates
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Geocoding search response envelope; `results` is absent on no match
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Option<Vec<GeocodedLocation>>,
}

/// Geocoding client for the Open-Meteo search API
pub struct GeocodingClient {
    /// HTTP client for upstream requests
    client: Client,
    /// Provider configuration
    config: GeocodingConfig,
}

impl GeocodingClient {
    /// Create a new client with the given configuration
    #[must_use]
    pub fn new(config: GeocodingConfig) -> Self {
        Self {
            client: create_client_with_timeout(config.request_timeout_seconds),
            config,
        }
    }

    /// Resolve a free-text query, routing ZIP-shaped input through the
    /// ZIP lookup path. A numeric query that is not a well-formed ZIP is
    /// rejected up front rather than handed to the name search, where it
    /// would only produce a misleading no-match.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a malformed ZIP code and upstream errors
    /// per the taxonomy in [`crate::errors`]
    pub async fn resolve(&self, query: &str) -> AppResult<Option<GeocodedLocation>> {
        if is_us_zip(query) {
            self.geocode_zip(query).await
        } else if looks_numeric(query) {
            Err(AppError::invalid_input(format!(
                "'{}' is not a valid US ZIP code",
                query.trim()
            )))
        } else {
            self.search(query).await
        }
    }

    /// Look up the best match for a place name
    ///
    /// # Errors
    ///
    /// Returns upstream errors per the taxonomy in [`crate::errors`]
    pub async fn search(&self, query: &str) -> AppResult<Option<GeocodedLocation>> {
        tracing::debug!(query = %query, "geocoding place name");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("name", query.trim()),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| Self::request_error(&e).with_source(e))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::external_service(
                "Open-Meteo geocoding",
                format!("search API returned status {status}"),
            ));
        }

        let search: SearchResponse = response.json().await.map_err(|e| {
            AppError::external_service("Open-Meteo geocoding", "unexpected search payload")
                .with_source(e)
        })?;

        Ok(search
            .results
            .and_then(|mut results| (!results.is_empty()).then(|| results.swap_remove(0))))
    }

    /// Look up a US ZIP code, falling back to the `"<zip>, US"` form when
    /// the bare ZIP has no match
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when fewer than five digits remain after
    /// stripping separators
    pub async fn geocode_zip(&self, zip: &str) -> AppResult<Option<GeocodedLocation>> {
        let digits: String = zip.chars().filter(char::is_ascii_digit).collect();

        if digits.len() < MIN_ZIP_DIGITS {
            return Err(AppError::invalid_input(format!(
                "ZIP code must have at least {MIN_ZIP_DIGITS} digits"
            )));
        }

        if let Some(location) = self.search(&digits).await? {
            return Ok(Some(location));
        }

        self.search(&format!("{digits}, US")).await
    }

    /// Classify a transport-level failure
    fn request_error(error: &reqwest::Error) -> AppError {
        if error.is_timeout() || error.is_connect() {
            AppError::external_unavailable("Open-Meteo geocoding")
        } else {
            AppError::external_service("Open-Meteo geocoding", error.to_string())
        }
    }
}
