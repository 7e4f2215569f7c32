// ABOUTME: Recommendation Generator mapping category and score to guidance
// ABOUTME: Fixed per-category summary lists and layered dressing advice tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clothing recommendations for the Mitten Index
//!
//! Both lookups are keyed solely by the five-way category enum so the
//! branching stays auditable and testable per key. Summary selection adds
//! score-sensitive variation within a band: the index is
//! `floor((score mod 20) / 5)` clamped to the list's last entry. That ties
//! the displayed sentence to the score's low-order digits, and clients may
//! key UI copy off the exact strings, so the mapping is pinned by tests.

use super::constants::summaries;
use crate::models::{Category, DressingAdvice};

/// Per-category summary strings, ordered mildest-first within each band
const PLEASANT_SUMMARIES: &[&str] = &[
    "Light jacket or sweater should be fine",
    "You might not even need a jacket if you're moving around",
];

const CHILLY_SUMMARIES: &[&str] = &[
    "Grab a jacket or light coat",
    "Maybe a hat if you're sensitive to cold",
];

const COLD_SUMMARIES: &[&str] = &[
    "Wear a warm coat",
    "Hat and gloves recommended",
    "Consider layers",
];

const BRUTAL_SUMMARIES: &[&str] = &[
    "Heavy winter coat essential",
    "Wear multiple layers",
    "Hat, gloves, and scarf required",
    "Consider long underwear",
    "Protect exposed skin",
];

const ARCTIC_SUMMARIES: &[&str] = &[
    "Full winter gear required",
    "Multiple layers including base layer",
    "Heavy coat, hat, gloves, scarf, face protection",
    "Limit time outdoors",
    "Consider hand and foot warmers",
];

/// Summary list for a category
const fn summaries_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Pleasant => PLEASANT_SUMMARIES,
        Category::Chilly => CHILLY_SUMMARIES,
        Category::Cold => COLD_SUMMARIES,
        Category::Brutal => BRUTAL_SUMMARIES,
        Category::Arctic => ARCTIC_SUMMARIES,
    }
}

/// Pick the summary string for a category and unrounded score
#[must_use]
pub fn summary_for(category: Category, score: f64) -> String {
    let entries = summaries_for(category);
    let step = ((score % summaries::BAND_WIDTH) / summaries::STEP).floor();

    // Clamp before casting so a NaN or out-of-band score falls back to the
    // first entry instead of panicking
    let index = if step.is_finite() && step >= 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = step as usize;
        index.min(entries.len() - 1)
    } else {
        0
    };

    entries[index].to_owned()
}

/// Layered dressing advice for a category, independent of the exact score
#[must_use]
pub fn dressing_for(category: Category) -> DressingAdvice {
    match category {
        Category::Pleasant => DressingAdvice {
            layers: vec!["T-shirt or light sweater".into()],
            accessories: vec![],
            tips: vec!["You'll be comfortable in light clothing".into()],
        },
        Category::Chilly => DressingAdvice {
            layers: vec![
                "Long-sleeve shirt".into(),
                "Light jacket or sweater".into(),
            ],
            accessories: vec!["Optional hat".into()],
            tips: vec!["Layer up if you'll be outside for a while".into()],
        },
        Category::Cold => DressingAdvice {
            layers: vec![
                "Base layer".into(),
                "Warm sweater or fleece".into(),
                "Winter coat".into(),
            ],
            accessories: vec!["Hat".into(), "Gloves".into()],
            tips: vec!["Keep your head and hands warm".into()],
        },
        Category::Brutal => DressingAdvice {
            layers: vec![
                "Base layer (long underwear)".into(),
                "Insulating layer (fleece or wool)".into(),
                "Heavy winter coat".into(),
            ],
            accessories: vec![
                "Warm hat".into(),
                "Insulated gloves".into(),
                "Scarf".into(),
            ],
            tips: vec![
                "Cover all exposed skin".into(),
                "Wear warm socks and boots".into(),
                "Consider hand warmers".into(),
            ],
        },
        Category::Arctic => DressingAdvice {
            layers: vec![
                "Thermal base layer".into(),
                "Insulating mid-layer".into(),
                "Heavy insulated coat".into(),
                "Windproof outer layer".into(),
            ],
            accessories: vec![
                "Insulated hat with ear coverage".into(),
                "Insulated gloves or mittens".into(),
                "Face mask or balaclava".into(),
                "Scarf".into(),
            ],
            tips: vec![
                "Limit outdoor exposure".into(),
                "Use hand and foot warmers".into(),
                "Watch for signs of frostbite".into(),
                "Stay dry - moisture makes it worse".into(),
            ],
        },
    }
}
