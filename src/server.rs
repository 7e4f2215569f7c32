// ABOUTME: Server resources and HTTP server assembly for the Mitten Index API
// ABOUTME: Shares upstream clients across handlers and serves the merged router
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP server assembly
//!
//! `ServerResources` bundles the upstream clients and configuration behind
//! one `Arc` so route handlers share connection pools and caches instead of
//! re-creating them per request.

use crate::config::environment::ServerConfig;
use crate::external::{GeocodingClient, OpenMeteoClient};
use crate::routes::{GeocodeRoutes, HealthRoutes, MittenIndexRoutes, WeatherRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Shared resources for all route handlers
pub struct ServerResources {
    /// Current-weather client with its reading cache
    pub weather: OpenMeteoClient,
    /// Geocoding client
    pub geocoder: GeocodingClient,
    /// Server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Build resources from configuration
    #[must_use]
    pub fn from_config(config: ServerConfig) -> Self {
        Self {
            weather: OpenMeteoClient::new(config.weather.clone()),
            geocoder: GeocodingClient::new(config.geocoding.clone()),
            config,
        }
    }
}

/// The Mitten Index HTTP server
pub struct MittenServer {
    resources: Arc<ServerResources>,
}

impl MittenServer {
    /// Create a server from configuration
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            resources: Arc::new(ServerResources::from_config(config)),
        }
    }

    /// Assemble the full application router
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(WeatherRoutes::routes(self.resources.clone()))
            .merge(GeocodeRoutes::routes(self.resources.clone()))
            .merge(MittenIndexRoutes::routes(self.resources.clone()))
    }

    /// Bind the configured port and serve until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if the port cannot be bound or the server fails
    pub async fn run(self) -> Result<()> {
        let port = self.resources.config.http_port;
        let router = self.router();

        let listener = TcpListener::bind(format!("0.0.0.0:{port}"))
            .await
            .with_context(|| format!("failed to bind port {port}"))?;

        info!("HTTP server listening on http://0.0.0.0:{port}");

        axum::serve(listener, router)
            .await
            .context("HTTP server terminated unexpectedly")
    }
}
