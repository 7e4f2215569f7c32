// ABOUTME: External API clients for upstream weather and geocoding providers
// ABOUTME: Open-Meteo forecast and geocoding integrations with caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! External API clients
//!
//! Both upstream providers are free Open-Meteo services. The clients own
//! the request/response translation and the error taxonomy mapping; they
//! never retry on their own.

/// Open-Meteo geocoding client
pub mod geocoding;
/// Open-Meteo current-weather client
pub mod open_meteo;

pub use geocoding::{GeocodedLocation, GeocodingClient};
pub use open_meteo::OpenMeteoClient;
