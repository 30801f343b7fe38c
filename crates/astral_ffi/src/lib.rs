//! Flutter bridge for the Astral core.

pub mod api;
