//! Aggregated compatibility report for rendering.

use super::library;
use super::placements::{moon_reading, rising_reading};
use crate::compatibility::{AstralCompatibility, SignProfile};
use serde::{Deserialize, Serialize};

/// Everything a compatibility screen displays for one pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub compatibility: AstralCompatibility,
    pub oracle_reading: String,
    pub strengths: Vec<String>,
    pub growth_opportunities: Vec<String>,
    pub poetic_summary: String,
    pub nurturing_advice: String,
    /// Present when both profiles carry a moon sign.
    pub moon_reading: Option<String>,
    /// Present when both profiles carry a rising sign.
    pub rising_reading: Option<String>,
}

impl CompatibilityReport {
    pub fn build(first: SignProfile, second: SignProfile) -> Self {
        let compatibility = AstralCompatibility::new(first, second);
        let (a, b) = (first.sun, second.sun);

        Self {
            compatibility,
            oracle_reading: library::reading(a, b),
            strengths: library::strengths(a, b),
            growth_opportunities: library::growth_opportunities(a, b),
            poetic_summary: library::poetic_summary(a, b),
            nurturing_advice: library::nurturing_advice(a, b),
            moon_reading: first
                .moon
                .zip(second.moon)
                .map(|(a, b)| moon_reading(a, b)),
            rising_reading: first
                .rising
                .zip(second.rising)
                .map(|(a, b)| rising_reading(a, b)),
        }
    }
}
