// ABOUTME: Route handlers for raw current-weather lookups
// ABOUTME: Validates coordinates and proxies Open-Meteo readings as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Weather routes
//!
//! `GET /api/weather?lat=44.9778&lon=-93.265` returns the current validated
//! weather reading for a coordinate pair, without running the scoring
//! pipeline.

use super::CoordinateQuery;
use crate::errors::AppError;
use crate::server::ServerResources;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Cache hint attached to successful responses
const CACHE_CONTROL_VALUE: &str = "public, max-age=300";

/// Weather routes implementation
pub struct WeatherRoutes;

impl WeatherRoutes {
    /// Create all weather routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/weather", get(Self::handle_current_weather))
            .with_state(resources)
    }

    /// Handle GET /api/weather - fetch the current reading for coordinates
    async fn handle_current_weather(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<CoordinateQuery>,
    ) -> Result<Response, AppError> {
        let coords = query.parse()?;
        let reading = resources.weather.current_weather(coords).await?;

        Ok((
            StatusCode::OK,
            [(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)],
            Json(reading),
        )
            .into_response())
    }
}
