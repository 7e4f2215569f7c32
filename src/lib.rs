// ABOUTME: Main library entry point for the Mitten Index scoring service
// ABOUTME: Exposes the scoring engine, upstream clients, and HTTP server modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Mitten Index
//!
//! A winter brutality scoring API. The core is a deterministic, pure
//! function pipeline that converts a weather observation into a 0-100
//! "brutality" score, a five-way severity category, and layered clothing
//! guidance. Around it, a thin HTTP service fetches current conditions from
//! Open-Meteo, geocodes user queries, and serves the computed index as JSON.
//!
//! ## Architecture
//!
//! - **Scoring**: the pure pipeline (factors → score → category →
//!   recommendation), free of any network or storage dependency
//! - **External**: Open-Meteo forecast and geocoding clients
//! - **Routes**: axum handlers owning input validation and the error taxonomy
//! - **Config**: environment-driven configuration with defaults
//!
//! ## Example
//!
//! ```rust
//! use mitten_index::models::WeatherReading;
//! use mitten_index::scoring::calculate_mitten_index;
//!
//! let reading = WeatherReading {
//!     temperature: -12.0,
//!     apparent_temperature: -20.0,
//!     wind_speed: 25.0,
//!     wind_direction: 315.0,
//!     relative_humidity: 75.0,
//!     cloud_cover: 90.0,
//!     solar_radiation: Some(50.0),
//!     time: chrono::Utc::now(),
//! };
//!
//! let result = calculate_mitten_index(&reading);
//! assert!(result.score <= 100);
//! println!("{}: {}", result.category, result.recommendation);
//! ```

/// Environment-driven configuration
pub mod config;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// External API clients (Open-Meteo weather and geocoding)
pub mod external;

/// Production logging and structured output
pub mod logging;

/// Common data models for readings and results
pub mod models;

/// `HTTP` routes for weather, geocoding, and index endpoints
pub mod routes;

/// The pure scoring pipeline
pub mod scoring;

/// Server resources and HTTP serving
pub mod server;

/// Utility functions and helpers
pub mod utils;
