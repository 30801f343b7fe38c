//! Date arithmetic for natal and transit placements.
//!
//! # Responsibility
//! - Approximate natal sun/moon/rising signs from birth fields.
//! - Approximate the current Moon phase and sign from a calendar date.
//!
//! # Invariants
//! - Every calculator is pure and total; the date is always an explicit input.
//! - No real ephemeris is consulted; results are calendar approximations.

pub mod lunar;
pub mod natal;
pub mod place;

pub use lunar::{moon_phase_on, moon_sign_on, MoonPhase, SkySnapshot};
pub use natal::{BirthData, BirthDataError, ChartCompleteness, NatalChart};
