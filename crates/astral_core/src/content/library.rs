//! Pair content lookup.
//!
//! # Responsibility
//! - Resolve curated text for a sign pair, or fall back to generated text.
//!
//! # Invariants
//! - Lookup is order-independent: `(a, b)` and `(b, a)` share one key.
//! - Every one of the 78 unordered pairs resolves to non-empty content.
//! - Curated entries are returned verbatim.

use super::curated::{self, CuratedPair};
use super::generated;
use crate::zodiac::ZodiacSign;

/// Orders two signs by name so pair lookups ignore argument order.
pub fn sorted_pair(a: ZodiacSign, b: ZodiacSign) -> (ZodiacSign, ZodiacSign) {
    if a.name() <= b.name() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Sorted `First-Second` key, e.g. `Aries-Leo`.
pub fn pair_key(a: ZodiacSign, b: ZodiacSign) -> String {
    let (first, second) = sorted_pair(a, b);
    format!("{}-{}", first.name(), second.name())
}

/// Whether the pair has hand-authored content.
pub fn is_curated(a: ZodiacSign, b: ZodiacSign) -> bool {
    curated_pair(a, b).is_some()
}

fn curated_pair(a: ZodiacSign, b: ZodiacSign) -> Option<&'static CuratedPair> {
    curated::lookup(pair_key(a, b).as_str())
}

/// Oracle reading for the pair.
pub fn reading(a: ZodiacSign, b: ZodiacSign) -> String {
    match curated_pair(a, b) {
        Some(pair) => pair.reading.to_string(),
        None => {
            let (first, second) = sorted_pair(a, b);
            generated::reading(first, second)
        }
    }
}

pub fn strengths(a: ZodiacSign, b: ZodiacSign) -> Vec<String> {
    match curated_pair(a, b) {
        Some(pair) => pair.strengths.iter().map(|item| item.to_string()).collect(),
        None => {
            let (first, second) = sorted_pair(a, b);
            generated::strengths(first, second)
        }
    }
}

pub fn growth_opportunities(a: ZodiacSign, b: ZodiacSign) -> Vec<String> {
    match curated_pair(a, b) {
        Some(pair) => pair
            .growth_opportunities
            .iter()
            .map(|item| item.to_string())
            .collect(),
        None => {
            let (first, second) = sorted_pair(a, b);
            generated::growth_opportunities(first, second)
        }
    }
}

pub fn poetic_summary(a: ZodiacSign, b: ZodiacSign) -> String {
    match curated_pair(a, b) {
        Some(pair) => pair.poetic_summary.to_string(),
        None => {
            let (first, second) = sorted_pair(a, b);
            generated::poetic_summary(first, second)
        }
    }
}

pub fn nurturing_advice(a: ZodiacSign, b: ZodiacSign) -> String {
    match curated_pair(a, b) {
        Some(pair) => pair.nurturing_advice.to_string(),
        None => {
            let (first, second) = sorted_pair(a, b);
            generated::nurturing_advice(first, second)
        }
    }
}
