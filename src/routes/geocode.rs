// ABOUTME: Route handlers for geocoding place names and US ZIP codes
// ABOUTME: Resolves free-text queries to coordinates with a distinct not-found path
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Geocoding routes
//!
//! `GET /api/geocode?q=55401` or `GET /api/geocode?q=Minneapolis` resolves a
//! ZIP code or place name to coordinates. A query with no match is a 404,
//! kept distinct from upstream failures so clients can tell "no such place"
//! from "try again later".

use crate::errors::AppError;
use crate::server::ServerResources;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for geocoding
#[derive(Debug, Deserialize, Default)]
pub struct GeocodeQuery {
    /// ZIP code or place name to resolve
    pub q: Option<String>,
}

/// Geocode routes implementation
pub struct GeocodeRoutes;

impl GeocodeRoutes {
    /// Create all geocoding routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/geocode", get(Self::handle_geocode))
            .with_state(resources)
    }

    /// Handle GET /api/geocode - resolve a ZIP code or place name
    async fn handle_geocode(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<GeocodeQuery>,
    ) -> Result<Response, AppError> {
        let q = query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| AppError::missing_field("q"))?;

        let location = resources
            .geocoder
            .resolve(q)
            .await?
            .ok_or_else(|| AppError::not_found(format!("location '{q}'")))?;

        Ok((StatusCode::OK, Json(location)).into_response())
    }
}
