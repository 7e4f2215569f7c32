// ABOUTME: Configuration module organization for the Mitten Index server
// ABOUTME: Environment-driven server and upstream provider configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration management

/// Environment-based server configuration
pub mod environment;

pub use environment::{GeocodingConfig, OpenMeteoConfig, ServerConfig};
