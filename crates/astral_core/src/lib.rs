//! Core domain logic for Astral.
//! This crate is the single source of truth for chart, compatibility and
//! horoscope derivation rules.

pub mod chart;
pub mod compatibility;
pub mod config;
pub mod content;
pub mod horoscope;
pub mod logging;
pub mod model;
pub mod service;
pub mod zodiac;

pub use chart::{
    BirthData, BirthDataError, ChartCompleteness, MoonPhase, NatalChart, SkySnapshot,
};
pub use compatibility::{
    AstralCompatibility, ElementalDynamic, HarmonyLevel, ModalityDynamic, SignProfile,
};
pub use config::CoreConfig;
pub use content::CompatibilityReport;
pub use horoscope::{weekly_horoscope, Horoscope};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::contact::{Contact, ContactId, ContactValidationError};
pub use service::astro_service::{AstroClock, AstroService, FixedClock, SystemClock};
pub use zodiac::{Element, Modality, ZodiacParseError, ZodiacSign};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
