//! Compatibility text content.
//!
//! # Responsibility
//! - Serve curated or generated readings, strengths, growth tips, poetic
//!   summaries and advice for any sign pair.
//! - Serve moon-pair and rising-pair readings from trait phrases.
//!
//! # Invariants
//! - Content resolution is total; there is no "missing content" state.

pub mod curated;
mod generated;
pub mod library;
pub mod placements;
pub mod report;

pub use library::{
    growth_opportunities, is_curated, nurturing_advice, pair_key, poetic_summary, reading,
    strengths,
};
pub use placements::{moon_reading, rising_reading};
pub use report::CompatibilityReport;
