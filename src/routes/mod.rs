// ABOUTME: Route module organization for Mitten Index HTTP endpoints
// ABOUTME: Shared coordinate validation plus per-domain route definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route modules for the Mitten Index server
//!
//! Each domain module contains route definitions and thin handler functions
//! that delegate to the scoring engine and external clients. The handlers own
//! input validation: the scoring core assumes already-validated numbers.

/// Geocoding lookup routes
pub mod geocode;
/// Health check and system status routes
pub mod health;
/// Mitten Index calculation routes
pub mod mitten_index;
/// Raw weather lookup routes
pub mod weather;

pub use geocode::GeocodeRoutes;
pub use health::HealthRoutes;
pub use mitten_index::MittenIndexRoutes;
pub use weather::WeatherRoutes;

use crate::errors::{AppError, AppResult};
use crate::models::Coordinates;
use serde::Deserialize;

/// Query parameters for coordinate-based endpoints
///
/// Parameters arrive as raw strings so that malformed values surface as the
/// service's own error envelope instead of the framework's plain-text
/// rejection.
#[derive(Debug, Deserialize, Default)]
pub struct CoordinateQuery {
    /// Latitude in decimal degrees
    pub lat: Option<String>,
    /// Longitude in decimal degrees
    pub lon: Option<String>,
}

impl CoordinateQuery {
    /// Validate and parse the query into coordinates
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when a parameter is absent,
    /// `InvalidInput` when unparseable or non-finite, and
    /// `ValueOutOfRange` when outside geographic bounds
    pub fn parse(&self) -> AppResult<Coordinates> {
        let latitude = parse_coordinate(self.lat.as_deref(), "lat")?;
        let longitude = parse_coordinate(self.lon.as_deref(), "lon")?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(
                AppError::out_of_range("latitude must be between -90 and 90")
                    .with_details(serde_json::json!({ "field": "lat" })),
            );
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(
                AppError::out_of_range("longitude must be between -180 and 180")
                    .with_details(serde_json::json!({ "field": "lon" })),
            );
        }

        Ok(Coordinates {
            latitude,
            longitude,
        })
    }
}

/// Parse a single coordinate parameter, rejecting non-finite values so NaN
/// never reaches the scoring pipeline
fn parse_coordinate(value: Option<&str>, field: &str) -> AppResult<f64> {
    let raw = value.ok_or_else(|| AppError::missing_field(field))?;

    let parsed: f64 = raw.trim().parse().map_err(|_| {
        AppError::invalid_input(format!("'{raw}' is not a valid number"))
            .with_details(serde_json::json!({ "field": field }))
    })?;

    if !parsed.is_finite() {
        return Err(
            AppError::invalid_input(format!("'{raw}' is not a finite number"))
                .with_details(serde_json::json!({ "field": field })),
        );
    }

    Ok(parsed)
}
