// ABOUTME: Factor Calculator deriving the five Mitten Index sub-scores
// ABOUTME: Pure step functions over temperature, wind, humidity, clouds, and sun
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Factor calculation for the Mitten Index
//!
//! Each factor is a pure, total function of the weather reading. Threshold
//! logic is driven by the ordered tables in [`super::constants`], evaluated
//! first-match, so band boundaries are mechanical to test.

use super::constants::{humidity, sunlight, temperature, unit_conversions, wind_chill};
use crate::models::{ScoreFactors, WeatherReading};

/// Convert Celsius to Fahrenheit
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * unit_conversions::CELSIUS_TO_FAHRENHEIT_SCALE
        + unit_conversions::CELSIUS_TO_FAHRENHEIT_OFFSET
}

/// Convert km/h to mph
#[must_use]
pub fn kmh_to_mph(kmh: f64) -> f64 {
    kmh * unit_conversions::KMH_TO_MPH_FACTOR
}

/// Compute all five factor contributions for a weather reading
#[must_use]
pub fn compute_factors(reading: &WeatherReading) -> ScoreFactors {
    ScoreFactors {
        temperature: temperature_factor(reading.temperature),
        wind_chill: wind_chill_factor(
            reading.temperature,
            reading.apparent_temperature,
            reading.wind_speed,
        ),
        humidity: humidity_factor(reading.temperature, reading.relative_humidity),
        cloud_cover: reading.cloud_cover,
        sunlight: sunlight_factor(reading.cloud_cover, reading.solar_radiation),
    }
}

/// Temperature contribution: a step function over Fahrenheit bands.
///
/// Discrete bands mirror how people perceive cold thresholds (freezing,
/// "really cold", "dangerously cold") rather than a continuous curve.
#[must_use]
pub fn temperature_factor(temp_celsius: f64) -> f64 {
    let temp_f = celsius_to_fahrenheit(temp_celsius);

    temperature::FACTOR_BANDS
        .iter()
        .find(|(cutoff, _)| temp_f >= *cutoff)
        .map_or(temperature::ARCTIC_FACTOR, |(_, factor)| *factor)
}

/// Wind chill contribution, from the gap between actual and apparent
/// temperature plus a step function of wind speed.
#[must_use]
pub fn wind_chill_factor(temp_celsius: f64, apparent_celsius: f64, wind_speed_kmh: f64) -> f64 {
    let temp_f = celsius_to_fahrenheit(temp_celsius);

    // Wind is irrelevant when it is already warm
    if temp_f >= wind_chill::WARM_CUTOFF_F {
        return 0.0;
    }

    let apparent_f = celsius_to_fahrenheit(apparent_celsius);
    let wind_mph = kmh_to_mph(wind_speed_kmh);

    let wind_contribution = wind_chill::WIND_BANDS
        .iter()
        .find(|(cutoff, _)| wind_mph >= *cutoff)
        .map_or(0.0, |(_, contribution)| *contribution);

    // How much colder it feels than it is
    let gap_contribution = ((temp_f - apparent_f) * wind_chill::GAP_SCALE).min(wind_chill::GAP_CAP);

    if temp_f < wind_chill::FREEZING_F {
        (wind_contribution + gap_contribution).min(100.0)
    } else {
        // Above freezing the gap is ignored and wind alone is capped
        wind_contribution.min(wind_chill::ABOVE_FREEZING_CAP)
    }
}

/// Humidity contribution: scaled by the humidity fraction with a
/// temperature-dependent cap, zero unless it is already cold.
#[must_use]
pub fn humidity_factor(temp_celsius: f64, humidity_pct: f64) -> f64 {
    let temp_f = celsius_to_fahrenheit(temp_celsius);

    if temp_f >= humidity::WARM_CUTOFF_F {
        return 0.0;
    }

    humidity::CAP_BANDS
        .iter()
        .find(|(cutoff, _)| temp_f < *cutoff)
        .map_or(0.0, |(_, cap)| (humidity_pct / 100.0 * cap).min(*cap))
}

/// Sunlight penalty: cloud cover minus a capped solar radiation bonus.
///
/// Unlike the other factors this is a penalty value consumed by subtraction
/// in the aggregator, and it may be negative on clear, bright days.
#[must_use]
pub fn sunlight_factor(cloud_cover_pct: f64, solar_radiation_wm2: Option<f64>) -> f64 {
    let radiation_bonus = solar_radiation_wm2.map_or(0.0, |radiation| {
        (radiation / sunlight::RADIATION_NORMALIZATION_WM2 * sunlight::RADIATION_BONUS_CAP)
            .min(sunlight::RADIATION_BONUS_CAP)
    });

    cloud_cover_pct - radiation_bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversions() {
        assert!((celsius_to_fahrenheit(0.0) - 32.0).abs() < f64::EPSILON);
        assert!((celsius_to_fahrenheit(100.0) - 212.0).abs() < f64::EPSILON);
        assert!((celsius_to_fahrenheit(-40.0) - (-40.0)).abs() < f64::EPSILON);
        assert!((kmh_to_mph(100.0) - 62.1371).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_factor_bands() {
        // 10°C = 50°F sits exactly on the pleasant cutoff
        assert!((temperature_factor(10.0) - 0.0).abs() < f64::EPSILON);
        // 0°C = 32°F
        assert!((temperature_factor(0.0) - 20.0).abs() < f64::EPSILON);
        // -10°C = 14°F, inside the [0, 20) band
        assert!((temperature_factor(-10.0) - 60.0).abs() < f64::EPSILON);
        // -20°C = -4°F, inside [-10, 0)
        assert!((temperature_factor(-20.0) - 80.0).abs() < f64::EPSILON);
        // -30°C = -22°F, below every band
        assert!((temperature_factor(-30.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_temperature_factor_monotonic_in_cold() {
        let temps = [15.0, 10.0, 5.0, 0.0, -5.0, -10.0, -20.0, -30.0, -40.0];
        let mut previous = temperature_factor(temps[0]);
        for temp in &temps[1..] {
            let factor = temperature_factor(*temp);
            assert!(
                factor >= previous,
                "temperature factor decreased at {temp}°C"
            );
            previous = factor;
        }
    }

    #[test]
    fn test_wind_chill_zero_when_warm() {
        // 15°C = 59°F: wind and gap must not matter
        assert!((wind_chill_factor(15.0, -10.0, 80.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wind_chill_combines_wind_and_gap_below_freezing() {
        // -5°C actual = 23°F, -15°C apparent = 5°F, gap 18°F → 36; 45 km/h ≈ 28 mph → 40
        let factor = wind_chill_factor(-5.0, -15.0, 45.0);
        assert!((factor - 76.0).abs() < 1e-9);
    }

    #[test]
    fn test_wind_chill_saturates_when_both_contributions_cap() {
        // -30°C = -22°F, -60°C = -76°F: gap 54°F doubles to 108 but caps at
        // 40; 100 km/h ≈ 62 mph caps the wind band at 40. Together they sum
        // to 80, the highest value the factor can reach
        let factor = wind_chill_factor(-30.0, -60.0, 100.0);
        assert!((factor - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wind_chill_above_freezing_ignores_gap() {
        // 5°C = 41°F actual: gap would contribute but is ignored; 45 km/h wind → 40, capped to 30
        let factor = wind_chill_factor(5.0, -5.0, 45.0);
        assert!((factor - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wind_chill_monotonic_in_wind_speed() {
        let speeds = [0.0, 5.0, 10.0, 20.0, 30.0, 45.0, 60.0];
        let mut previous = wind_chill_factor(-5.0, -5.0, speeds[0]);
        for speed in &speeds[1..] {
            let factor = wind_chill_factor(-5.0, -5.0, *speed);
            assert!(
                factor >= previous,
                "wind chill factor decreased at {speed} km/h"
            );
            previous = factor;
        }
    }

    #[test]
    fn test_humidity_factor_zero_when_mild() {
        // 5°C = 41°F, above the humidity cutoff
        assert!((humidity_factor(5.0, 100.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_humidity_factor_caps_scale_with_cold() {
        // -20°C = -4°F → cap 30
        assert!((humidity_factor(-20.0, 100.0) - 30.0).abs() < f64::EPSILON);
        assert!((humidity_factor(-20.0, 50.0) - 15.0).abs() < f64::EPSILON);
        // -10°C = 14°F → cap 20
        assert!((humidity_factor(-10.0, 100.0) - 20.0).abs() < f64::EPSILON);
        // 0°C = 32°F → cap 10
        assert!((humidity_factor(0.0, 100.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sunlight_factor_penalty_minus_bonus() {
        // Full clouds, no radiation data
        assert!((sunlight_factor(100.0, None) - 100.0).abs() < f64::EPSILON);
        // Clear and bright: negative penalty (a net bonus)
        assert!((sunlight_factor(10.0, Some(1000.0)) - (-5.0)).abs() < 1e-9);
        // Radiation bonus caps at 15 regardless of intensity
        assert!((sunlight_factor(50.0, Some(5000.0)) - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_factors_cloud_cover_is_identity() {
        let reading = WeatherReading {
            temperature: -5.0,
            apparent_temperature: -10.0,
            wind_speed: 15.0,
            wind_direction: 0.0,
            relative_humidity: 70.0,
            cloud_cover: 63.0,
            solar_radiation: Some(120.0),
            time: chrono::Utc::now(),
        };

        let factors = compute_factors(&reading);
        assert!((factors.cloud_cover - 63.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_factors_do_not_panic_on_non_finite_input() {
        let reading = WeatherReading {
            temperature: f64::NAN,
            apparent_temperature: f64::INFINITY,
            wind_speed: -1.0,
            wind_direction: 0.0,
            relative_humidity: f64::NAN,
            cloud_cover: 100.0,
            solar_radiation: Some(f64::NEG_INFINITY),
            time: chrono::Utc::now(),
        };

        // Validation belongs to the boundary; the core only promises not to crash
        let _ = compute_factors(&reading);
    }
}
