//! Zodiac compatibility scoring.
//!
//! # Responsibility
//! - Classify element and modality dynamics between two signs.
//! - Produce harmony scores and tiers for sign pairs and full profiles.
//!
//! # Invariants
//! - Scores are always within `0..=100`; overflow is clamped, never reported.

pub mod dynamics;
pub mod scorer;

pub use dynamics::{ElementalDynamic, ModalityDynamic};
pub use scorer::{blend, score, AstralCompatibility, HarmonyLevel, SignProfile};
