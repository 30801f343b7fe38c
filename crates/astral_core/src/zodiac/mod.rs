//! Static zodiac catalog.
//!
//! # Responsibility
//! - Define the closed set of signs, elements and modalities.
//! - Hold per-sign trait phrases used by content generators.
//!
//! # Invariants
//! - Catalog data is compile-time constant; nothing here is created at runtime.

pub mod sign;
pub mod traits;

pub use sign::{Element, Modality, ZodiacParseError, ZodiacSign};
