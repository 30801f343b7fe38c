//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate chart, compatibility and horoscope calls into use-case APIs.
//! - Keep UI/FFI layers decoupled from calculator details.

pub mod astro_service;
