// ABOUTME: Integration tests for the Mitten Index scoring pipeline
// ABOUTME: Validates end-to-end scenarios, monotonicity, clamping, and idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use mitten_index::models::{Category, ScoreFactors, WeatherReading};
use mitten_index::scoring::{aggregate, calculate_mitten_index, compute_factors};

fn reading(
    temperature: f64,
    apparent: f64,
    wind_kmh: f64,
    humidity: f64,
    cloud: f64,
    radiation: Option<f64>,
) -> WeatherReading {
    WeatherReading {
        temperature,
        apparent_temperature: apparent,
        wind_speed: wind_kmh,
        wind_direction: 180.0,
        relative_humidity: humidity,
        cloud_cover: cloud,
        solar_radiation: radiation,
        time: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn test_pleasant_weather_scores_low() {
    // 20°C, light wind, mostly sunny
    let result = calculate_mitten_index(&reading(20.0, 20.0, 5.0, 50.0, 20.0, Some(500.0)));

    assert!(result.score < 30);
    assert_eq!(result.category, Category::Pleasant);
    assert!(result.factors.temperature < 30.0);
}

#[test]
fn test_extreme_cold_scores_high() {
    // -30°C feeling like -50°C in a 50 km/h wind under full overcast
    let result = calculate_mitten_index(&reading(-30.0, -50.0, 50.0, 90.0, 100.0, Some(0.0)));

    assert!((result.factors.temperature - 100.0).abs() < f64::EPSILON);
    assert!(result.score > 60);
    assert!(matches!(
        result.category,
        Category::Brutal | Category::Arctic
    ));
}

#[test]
fn test_brutal_cold_with_strong_wind() {
    // -15°C feeling like -25°C, strong wind, overcast
    let result = calculate_mitten_index(&reading(-15.0, -25.0, 30.0, 80.0, 90.0, Some(0.0)));

    assert!(result.score > 40);
    assert!(result.factors.temperature >= 60.0);
    assert!(result.factors.wind_chill > 20.0);
}

#[test]
fn test_wind_strictly_increases_score_at_same_temperature() {
    // Same 0°C actual temperature, different wind and apparent temperature
    let windy = calculate_mitten_index(&reading(0.0, -15.0, 25.0, 60.0, 50.0, Some(200.0)));
    let calm = calculate_mitten_index(&reading(0.0, 0.0, 2.0, 60.0, 50.0, Some(200.0)));

    assert!(windy.factors.wind_chill > calm.factors.wind_chill);
    assert!(windy.score > calm.score);
}

#[test]
fn test_sunshine_lowers_the_score() {
    let sunny = calculate_mitten_index(&reading(5.0, 5.0, 10.0, 50.0, 10.0, Some(600.0)));
    let overcast = calculate_mitten_index(&reading(5.0, 5.0, 10.0, 50.0, 100.0, Some(0.0)));

    assert!(sunny.score < overcast.score);
    assert!(sunny.factors.sunlight < overcast.factors.sunlight);
}

#[test]
fn test_warm_weather_zeroes_cold_factors() {
    // 15°C with a gale and soaked air: temperature, wind chill, and
    // humidity factors must all stay zero
    let factors = compute_factors(&reading(15.0, 10.0, 80.0, 100.0, 40.0, None));

    assert!((factors.temperature - 0.0).abs() < f64::EPSILON);
    assert!((factors.wind_chill - 0.0).abs() < f64::EPSILON);
    assert!((factors.humidity - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_decreasing_temperature_never_decreases_score() {
    let temps = [20.0, 10.0, 5.0, 0.0, -5.0, -10.0, -15.0, -20.0, -30.0, -40.0];
    let mut previous = 0_u8;

    for (i, temp) in temps.iter().enumerate() {
        let result = calculate_mitten_index(&reading(*temp, *temp, 10.0, 60.0, 50.0, Some(100.0)));
        if i > 0 {
            assert!(
                result.score >= previous,
                "score decreased when temperature dropped to {temp}°C"
            );
        }
        previous = result.score;
    }
}

#[test]
fn test_aggregate_clamps_extreme_factors() {
    let extreme = ScoreFactors {
        temperature: 100.0,
        wind_chill: 100.0,
        humidity: 30.0,
        cloud_cover: 100.0,
        sunlight: -15.0,
    };
    let score = aggregate(&extreme);
    assert!(score <= 100.0);
    assert!(score >= 0.0);

    // A clear bright day cannot drive the score negative
    let bright = ScoreFactors {
        temperature: 0.0,
        wind_chill: 0.0,
        humidity: 0.0,
        cloud_cover: 0.0,
        sunlight: 15.0,
    };
    assert!((aggregate(&bright) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_pipeline_is_idempotent() {
    let input = reading(-7.5, -13.0, 18.0, 65.0, 85.0, Some(120.0));

    let first = calculate_mitten_index(&input);
    let second = calculate_mitten_index(&input);

    assert_eq!(first, second);
}

#[test]
fn test_score_is_always_in_range() {
    // Sweep a grid of harsh-to-mild conditions; the rounded score must
    // stay within 0-100 everywhere
    for temp in [-45.0, -20.0, 0.0, 15.0, 35.0] {
        for wind in [0.0, 15.0, 40.0, 90.0] {
            for cloud in [0.0, 50.0, 100.0] {
                let result = calculate_mitten_index(&reading(
                    temp,
                    temp - 8.0,
                    wind,
                    70.0,
                    cloud,
                    Some(300.0),
                ));
                assert!(result.score <= 100, "score out of range for temp {temp}");
            }
        }
    }
}

#[test]
fn test_missing_radiation_defaults_to_no_bonus() {
    let without = calculate_mitten_index(&reading(-5.0, -9.0, 12.0, 60.0, 40.0, None));
    let with_zero = calculate_mitten_index(&reading(-5.0, -9.0, 12.0, 60.0, 40.0, Some(0.0)));

    assert_eq!(without.score, with_zero.score);
    assert!((without.factors.sunlight - with_zero.factors.sunlight).abs() < f64::EPSILON);
}

#[test]
fn test_dressing_advice_matches_category() {
    let pleasant = calculate_mitten_index(&reading(22.0, 22.0, 3.0, 40.0, 10.0, Some(700.0)));
    assert_eq!(pleasant.category, Category::Pleasant);
    assert!(pleasant.dressing.accessories.is_empty());

    let brutal = calculate_mitten_index(&reading(-35.0, -55.0, 55.0, 90.0, 100.0, Some(0.0)));
    assert_eq!(brutal.category, Category::Brutal);
    assert!(brutal
        .dressing
        .tips
        .iter()
        .any(|tip| tip.to_lowercase().contains("exposed skin")));
    assert!(brutal
        .dressing
        .accessories
        .iter()
        .any(|item| item.to_lowercase().contains("gloves")));
}

#[test]
fn test_result_serializes_in_wire_format() {
    let result = calculate_mitten_index(&reading(-10.0, -18.0, 20.0, 70.0, 80.0, Some(100.0)));
    let json = serde_json::to_value(&result).unwrap();

    assert!(json.get("score").unwrap().is_u64());
    assert!(json.get("category").unwrap().is_string());
    assert!(json.get("recommendation").unwrap().is_string());

    let factors = json.get("factors").unwrap();
    for field in [
        "temperature",
        "windChill",
        "humidity",
        "cloudCover",
        "sunlight",
    ] {
        assert!(factors.get(field).is_some(), "missing factor field {field}");
    }

    let dressing = json.get("dressing").unwrap();
    assert!(dressing.get("layers").unwrap().is_array());
    assert!(dressing.get("accessories").unwrap().is_array());
    assert!(dressing.get("tips").unwrap().is_array());
}
