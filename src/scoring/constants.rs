// ABOUTME: Named constants for the Mitten Index scoring engine
// ABOUTME: Threshold tables, factor weights, and unit conversion factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scoring constants for the Mitten Index
//!
//! Threshold tables are ordered `(cutoff, value)` pairs evaluated first-match
//! so that boundary behavior is auditable and recalibration is a data change,
//! not a code change.

/// Unit conversion factors
pub mod unit_conversions {
    /// Multiplier for Celsius to Fahrenheit conversion
    pub const CELSIUS_TO_FAHRENHEIT_SCALE: f64 = 9.0 / 5.0;

    /// Offset for Celsius to Fahrenheit conversion
    pub const CELSIUS_TO_FAHRENHEIT_OFFSET: f64 = 32.0;

    /// Kilometers per hour to miles per hour
    pub const KMH_TO_MPH_FACTOR: f64 = 0.621_371;
}

/// Temperature factor bands
pub mod temperature {
    /// Step bands over Fahrenheit temperature, warmest first.
    /// The first entry whose cutoff the temperature meets or exceeds wins.
    pub const FACTOR_BANDS: &[(f64, f64)] = &[
        (50.0, 0.0),   // Pleasant
        (32.0, 20.0),  // Chilly
        (20.0, 40.0),  // Cold
        (0.0, 60.0),   // Very cold
        (-10.0, 80.0), // Brutal
    ];

    /// Factor when the temperature falls below every band
    pub const ARCTIC_FACTOR: f64 = 100.0;
}

/// Wind chill factor thresholds
pub mod wind_chill {
    /// Above this Fahrenheit temperature wind is irrelevant
    pub const WARM_CUTOFF_F: f64 = 50.0;

    /// Freezing point in Fahrenheit, below which the apparent-temperature
    /// gap contributes to the factor
    pub const FREEZING_F: f64 = 32.0;

    /// Wind speed contribution bands over miles per hour, strongest first
    pub const WIND_BANDS: &[(f64, f64)] = &[
        (25.0, 40.0), // Strong wind
        (15.0, 25.0),
        (10.0, 15.0),
        (5.0, 5.0),
    ];

    /// Multiplier applied to the actual-vs-apparent Fahrenheit gap
    pub const GAP_SCALE: f64 = 2.0;

    /// Ceiling on the gap contribution
    pub const GAP_CAP: f64 = 40.0;

    /// Ceiling on the wind-only factor between freezing and the warm cutoff
    pub const ABOVE_FREEZING_CAP: f64 = 30.0;
}

/// Humidity factor thresholds
pub mod humidity {
    /// At or above this Fahrenheit temperature humidity does not contribute
    pub const WARM_CUTOFF_F: f64 = 40.0;

    /// Temperature-dependent caps, coldest first. The first entry whose
    /// cutoff the temperature is strictly below wins; the cap scales the
    /// humidity fraction and also bounds the factor.
    pub const CAP_BANDS: &[(f64, f64)] = &[
        (0.0, 30.0),  // Bone-deep chill
        (20.0, 20.0), // Cold
        (40.0, 10.0), // Chilly
    ];
}

/// Sunlight factor parameters
pub mod sunlight {
    /// Solar radiation normalization denominator (typical range 0-1000 W/m²)
    pub const RADIATION_NORMALIZATION_WM2: f64 = 1000.0;

    /// Maximum warmth bonus the sun can contribute
    pub const RADIATION_BONUS_CAP: f64 = 15.0;
}

/// Fixed weights combining the five factors into the overall score
pub mod weights {
    /// Temperature weight (most important)
    pub const TEMPERATURE: f64 = 0.40;

    /// Wind chill weight
    pub const WIND_CHILL: f64 = 0.30;

    /// Humidity weight (matters when cold)
    pub const HUMIDITY: f64 = 0.15;

    /// Cloud cover weight
    pub const CLOUD_COVER: f64 = 0.10;

    /// Sunlight weight, negative because sunlight reduces brutality
    pub const SUNLIGHT: f64 = -0.05;
}

/// Category band boundaries over the overall score, half-open on the lower
/// category (a score of exactly 20 is chilly, not pleasant)
pub mod categories {
    /// Upper bound of the pleasant band
    pub const PLEASANT_MAX: f64 = 20.0;

    /// Upper bound of the chilly band
    pub const CHILLY_MAX: f64 = 40.0;

    /// Upper bound of the cold band
    pub const COLD_MAX: f64 = 60.0;

    /// Upper bound of the brutal band
    pub const BRUTAL_MAX: f64 = 80.0;
}

/// Summary selection parameters
pub mod summaries {
    /// Width of a category band; the score's remainder within it drives
    /// summary selection
    pub const BAND_WIDTH: f64 = 20.0;

    /// Score points per summary step within a band
    pub const STEP: f64 = 5.0;
}
