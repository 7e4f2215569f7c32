// ABOUTME: Route handlers for the Mitten Index calculation endpoint
// ABOUTME: Fetches a reading, runs the scoring pipeline, returns the full result
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mitten Index routes
//!
//! `GET /api/mitten-index?lat=44.9778&lon=-93.265` fetches the current
//! weather for the coordinates, runs the scoring pipeline, and returns the
//! result together with the reading and location echo.

use super::CoordinateQuery;
use crate::errors::AppError;
use crate::models::{Coordinates, MittenIndexResult, WeatherReading};
use crate::scoring::calculate_mitten_index;
use crate::server::ServerResources;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Cache hint attached to successful responses
const CACHE_CONTROL_VALUE: &str = "public, max-age=300";

/// Response body: the index result plus the reading and location it came from
#[derive(Debug, Serialize, Deserialize)]
pub struct MittenIndexResponse {
    /// The computed index, flattened into the top level
    #[serde(flatten)]
    pub index: MittenIndexResult,
    /// The weather reading the index was computed from
    pub weather: WeatherReading,
    /// The coordinates the reading was fetched for
    pub location: Coordinates,
}

/// Mitten Index routes implementation
pub struct MittenIndexRoutes;

impl MittenIndexRoutes {
    /// Create all Mitten Index routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/mitten-index", get(Self::handle_mitten_index))
            .with_state(resources)
    }

    /// Handle GET /api/mitten-index - score the current weather at coordinates
    async fn handle_mitten_index(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<CoordinateQuery>,
    ) -> Result<Response, AppError> {
        let location = query.parse()?;
        let weather = resources.weather.current_weather(location).await?;

        let index = calculate_mitten_index(&weather);

        tracing::info!(
            score = index.score,
            category = %index.category,
            latitude = location.latitude,
            longitude = location.longitude,
            "computed mitten index"
        );

        let response = MittenIndexResponse {
            index,
            weather,
            location,
        };

        Ok((
            StatusCode::OK,
            [(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)],
            Json(response),
        )
            .into_response())
    }
}
