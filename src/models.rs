// ABOUTME: Common data models for weather readings and Mitten Index results
// ABOUTME: Serde types shared by the scoring engine, external clients, and routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data models for the Mitten Index service
//!
//! All types serialize in camelCase to match the public API wire format.
//! Every value is created fresh per request and discarded once the caller
//! consumes the result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180]
    pub longitude: f64,
}

/// A single validated weather observation, as supplied by the weather provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    /// Air temperature in Celsius
    pub temperature: f64,
    /// "Feels like" temperature in Celsius, accounting for wind and humidity
    pub apparent_temperature: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_direction: f64,
    /// Relative humidity percentage (0-100)
    pub relative_humidity: f64,
    /// Cloud cover percentage (0-100)
    pub cloud_cover: f64,
    /// Solar radiation in W/m², when the provider reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solar_radiation: Option<f64>,
    /// Observation timestamp (UTC)
    pub time: DateTime<Utc>,
}

/// Individual factor contributions to the overall score
///
/// Each factor is conceptually 0-100, except `sunlight` which is a
/// penalty-minus-bonus value and may be negative before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreFactors {
    /// Temperature contribution
    pub temperature: f64,
    /// Wind chill contribution
    pub wind_chill: f64,
    /// Humidity contribution
    pub humidity: f64,
    /// Cloud cover contribution
    pub cloud_cover: f64,
    /// Sunlight penalty, subtracted during aggregation
    pub sunlight: f64,
}

/// Severity category derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Score below 20: light clothing weather
    Pleasant,
    /// Score 20-39: jacket weather
    Chilly,
    /// Score 40-59: warm coat, hat, and gloves
    Cold,
    /// Score 60-79: heavy winter gear
    Brutal,
    /// Score 80 and up: full winter gear, limit exposure
    Arctic,
}

impl Category {
    /// Stable lowercase name matching the wire format
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pleasant => "pleasant",
            Self::Chilly => "chilly",
            Self::Cold => "cold",
            Self::Brutal => "brutal",
            Self::Arctic => "arctic",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layered clothing guidance for a severity category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DressingAdvice {
    /// Clothing layers, innermost first
    pub layers: Vec<String>,
    /// Accessories such as hats, gloves, and face protection
    pub accessories: Vec<String>,
    /// Practical tips for the conditions
    pub tips: Vec<String>,
}

/// The computed Mitten Index for one weather reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MittenIndexResult {
    /// Overall brutality score, 0-100, higher is harsher
    pub score: u8,
    /// Severity category for the score
    pub category: Category,
    /// Individual factor contributions
    pub factors: ScoreFactors,
    /// Short human-readable summary
    pub recommendation: String,
    /// Layered clothing guidance
    pub dressing: DressingAdvice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Pleasant).unwrap(),
            "\"pleasant\""
        );
        assert_eq!(
            serde_json::to_string(&Category::Arctic).unwrap(),
            "\"arctic\""
        );
    }

    #[test]
    fn test_category_display_matches_wire_format() {
        assert_eq!(Category::Brutal.to_string(), "brutal");
        assert_eq!(Category::Cold.as_str(), "cold");
    }

    #[test]
    fn test_weather_reading_wire_format_is_camel_case() {
        let reading = WeatherReading {
            temperature: -5.0,
            apparent_temperature: -12.0,
            wind_speed: 20.0,
            wind_direction: 270.0,
            relative_humidity: 80.0,
            cloud_cover: 90.0,
            solar_radiation: None,
            time: Utc::now(),
        };

        let json = serde_json::to_value(&reading).unwrap();
        assert!(json.get("apparentTemperature").is_some());
        assert!(json.get("relativeHumidity").is_some());
        // Absent radiation is omitted, not serialized as null
        assert!(json.get("solarRadiation").is_none());
    }
}
