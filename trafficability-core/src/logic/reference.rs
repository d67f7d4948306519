//! Agronomy Reference
//!
//! Keyword lookup for short definitions and threshold summaries, so a UI or
//! CLI can answer questions like "what bulk density is critical?" without a
//! full assessment. Matching is case-insensitive substring; the first topic
//! in the table wins.

const TOPICS: &[(&[&str], &str)] = &[
    (
        &["trafficability"],
        "Trafficability: capacity of land to support vehicle operations without significant soil degradation (compaction, rutting). Influenced by moisture, texture, and load.",
    ),
    (
        &["compaction"],
        "Soil compaction: increase in bulk density and soil strength caused by applied stresses, reducing porosity, aeration, and infiltration. Measured with bulk density and cone index.",
    ),
    (
        &["bulk density", "bd"],
        "Bulk density typical normal range: 1.0-1.4 g/cm3. Values above 1.4 g/cm3 indicate compaction; critical value about 1.43 g/cm3 for loam.",
    ),
    (
        &["cone index", "ci"],
        "Cone index (CI): 800-1430 kPa spans the critical trafficability band. Below about 800 kPa the soil offers reduced bearing capacity; around 3000 kPa root penetration approaches zero.",
    ),
    (
        &["smd", "soil moisture deficit", "moisture"],
        "SMD: positive values (for example +10 mm) indicate drier conditions favourable for traffic. Soil at or above field capacity (SMD below zero) is high risk for compaction.",
    ),
    (
        &["rut"],
        "Rut depth: depressions left by passing wheels, an observable compaction symptom. Depths above 10 cm indicate severe surface disturbance.",
    ),
];

/// Look up the first topic whose keyword appears in the query
pub fn lookup(query: &str) -> Option<&'static str> {
    let q = query.to_lowercase();
    TOPICS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| q.contains(k)))
        .map(|(_, text)| *text)
}

// ============================================================================
// TESTS
// ============================================================================
