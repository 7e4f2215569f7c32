// ABOUTME: Mitten Index scoring pipeline combining factors into a final result
// ABOUTME: Aggregates weighted factors, categorizes the score, derives guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Mitten Index scoring engine
//!
//! A deterministic, pure function pipeline: weather reading → factors →
//! score → category → recommendation → result. Stateless, side-effect free,
//! and safe to invoke concurrently without coordination. Input validation is
//! owned by the route layer; the engine is total over well-formed numeric
//! input and merely promises not to panic on anything else.

/// Threshold tables, weights, and conversion factors
pub mod constants;
/// Factor Calculator for the five sub-scores
pub mod factors;
/// Recommendation Generator for summaries and dressing advice
pub mod recommendation;

pub use factors::compute_factors;
pub use recommendation::{dressing_for, summary_for};

use crate::models::{Category, MittenIndexResult, ScoreFactors, WeatherReading};
use constants::{categories, weights};

/// Combine factor contributions into the overall score, clamped to [0, 100].
///
/// Returns the unrounded value; rounding happens once at pipeline exit so
/// downstream consumers never compound rounding error.
#[must_use]
pub fn aggregate(factors: &ScoreFactors) -> f64 {
    let score = factors.temperature * weights::TEMPERATURE
        + factors.wind_chill * weights::WIND_CHILL
        + factors.humidity * weights::HUMIDITY
        + factors.cloud_cover * weights::CLOUD_COVER
        - factors.sunlight * weights::SUNLIGHT.abs();

    score.clamp(0.0, 100.0)
}

impl Category {
    /// Map an overall score to its severity band.
    ///
    /// Boundaries are half-open on the lower category: a score of exactly
    /// 20 is chilly, not pleasant.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < categories::PLEASANT_MAX {
            Self::Pleasant
        } else if score < categories::CHILLY_MAX {
            Self::Chilly
        } else if score < categories::COLD_MAX {
            Self::Cold
        } else if score < categories::BRUTAL_MAX {
            Self::Brutal
        } else {
            Self::Arctic
        }
    }
}

/// Run the full scoring pipeline for one weather reading
#[must_use]
pub fn calculate_mitten_index(reading: &WeatherReading) -> MittenIndexResult {
    let factors = compute_factors(reading);
    let score = aggregate(&factors);
    let category = Category::from_score(score);
    let recommendation = summary_for(category, score);
    let dressing = dressing_for(category);

    // Single rounding point; `aggregate` already clamped to [0, 100]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = score.round() as u8;

    MittenIndexResult {
        score: rounded,
        category,
        factors,
        recommendation,
        dressing,
    }
}
