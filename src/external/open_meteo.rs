// ABOUTME: Open-Meteo current-weather client with TTL caching
// ABOUTME: Fetches and translates forecast API responses into WeatherReading values
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Open-Meteo current-weather client
//!
//! Fetches the current observation for a coordinate pair and maps it into
//! the service's [`WeatherReading`] model. Readings are cached briefly per
//! coordinate so bursts of requests for the same location do not hammer the
//! free upstream API.
//!
//! # API Reference
//! Open-Meteo forecast API: <https://open-meteo.com/en/docs>

use crate::config::environment::OpenMeteoConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{Coordinates, WeatherReading};
use crate::utils::http_client::create_client_with_timeout;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// The `current` fields requested from the forecast API
const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,wind_speed_10m,\
     wind_direction_10m,relative_humidity_2m,cloud_cover,direct_radiation";

/// Current-weather client for the Open-Meteo forecast API
pub struct OpenMeteoClient {
    /// HTTP client for upstream requests
    client: Client,
    /// Provider configuration
    config: OpenMeteoConfig,
    /// Recently fetched readings keyed by coordinates
    cache: RwLock<HashMap<String, CachedReading>>,
}

/// Cached reading with expiration
#[derive(Debug, Clone)]
struct CachedReading {
    reading: WeatherReading,
    expires_at: Instant,
}

/// Open-Meteo forecast API response envelope
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

/// The `current` block of a forecast response, in provider units
#[derive(Debug, Deserialize)]
struct CurrentConditions {
    /// Unix timestamp (requested via `timeformat=unixtime`)
    time: i64,
    /// Air temperature in Celsius
    temperature_2m: f64,
    /// "Feels like" temperature in Celsius
    apparent_temperature: f64,
    /// Wind speed in km/h
    wind_speed_10m: f64,
    /// Wind direction in degrees
    wind_direction_10m: f64,
    /// Relative humidity percentage
    relative_humidity_2m: f64,
    /// Cloud cover percentage
    cloud_cover: f64,
    /// Direct solar radiation in W/m², not reported by every model
    direct_radiation: Option<f64>,
}

impl OpenMeteoClient {
    /// Create a new client with the given configuration
    #[must_use]
    pub fn new(config: OpenMeteoConfig) -> Self {
        Self {
            client: create_client_with_timeout(config.request_timeout_seconds),
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch the current weather reading for a coordinate pair
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceUnavailable` on timeouts and connection
    /// failures, `ExternalServiceError` on non-2xx responses or unexpected
    /// payloads
    pub async fn current_weather(&self, coords: Coordinates) -> AppResult<WeatherReading> {
        let cache_key = Self::cache_key(coords);

        if let Some(cached) = self.cache.read().await.get(&cache_key) {
            if cached.expires_at > Instant::now() {
                tracing::debug!(key = %cache_key, "weather cache hit");
                return Ok(cached.reading.clone());
            }
        }

        let reading = self.fetch_current(coords).await?;

        let mut cache = self.cache.write().await;
        Self::prune_expired(&mut cache, Instant::now());
        cache.insert(
            cache_key,
            CachedReading {
                reading: reading.clone(),
                expires_at: Instant::now() + Duration::from_secs(self.config.cache_ttl_seconds),
            },
        );

        Ok(reading)
    }

    /// Drop expired entries so the cache stays bounded by the set of
    /// coordinates queried within one TTL window
    fn prune_expired(cache: &mut HashMap<String, CachedReading>, now: Instant) {
        cache.retain(|_, entry| entry.expires_at > now);
    }

    /// Perform the upstream request and translate the response
    async fn fetch_current(&self, coords: Coordinates) -> AppResult<WeatherReading> {
        tracing::debug!(
            latitude = coords.latitude,
            longitude = coords.longitude,
            "fetching current weather from Open-Meteo"
        );

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("timeformat", "unixtime".to_string()),
                ("timezone", "UTC".to_string()),
            ])
            .send()
            .await
            .map_err(|e| Self::request_error("Open-Meteo", &e).with_source(e))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::external_service(
                "Open-Meteo",
                format!("forecast API returned status {status}"),
            ));
        }

        let forecast: ForecastResponse = response.json().await.map_err(|e| {
            AppError::external_service("Open-Meteo", "unexpected forecast payload").with_source(e)
        })?;

        Self::into_reading(forecast.current)
    }

    /// Map provider fields into the service model
    fn into_reading(current: CurrentConditions) -> AppResult<WeatherReading> {
        let time: DateTime<Utc> = DateTime::from_timestamp(current.time, 0).ok_or_else(|| {
            AppError::external_service("Open-Meteo", "observation timestamp out of range")
        })?;

        Ok(WeatherReading {
            temperature: current.temperature_2m,
            apparent_temperature: current.apparent_temperature,
            wind_speed: current.wind_speed_10m,
            wind_direction: current.wind_direction_10m,
            relative_humidity: current.relative_humidity_2m,
            cloud_cover: current.cloud_cover,
            solar_radiation: current.direct_radiation,
            time,
        })
    }

    /// Classify a transport-level failure
    fn request_error(service: &str, error: &reqwest::Error) -> AppError {
        if error.is_timeout() || error.is_connect() {
            AppError::external_unavailable(service)
        } else {
            AppError::external_service(service, error.to_string())
        }
    }

    /// Cache key with enough precision to distinguish neighborhoods
    fn cache_key(coords: Coordinates) -> String {
        format!("{:.4}_{:.4}", coords.latitude, coords.longitude)
    }
}
