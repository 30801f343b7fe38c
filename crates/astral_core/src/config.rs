//! Process-level configuration for hosts that embed core.
//!
//! # Responsibility
//! - Resolve logging settings from environment variables with defaults.
//!
//! # Invariants
//! - Resolution never fails; blank or missing variables fall back to defaults.
//! - The resolved log directory is always absolute.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "ASTRAL_LOG_LEVEL";
/// Environment variable overriding the log directory.
pub const ENV_LOG_DIR: &str = "ASTRAL_LOG_DIR";

const DEFAULT_LOG_DIR_NAME: &str = "astral-logs";

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        }
    }
}

impl CoreConfig {
    /// Reads `ASTRAL_LOG_LEVEL` / `ASTRAL_LOG_DIR` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let log_level = non_blank(lookup(ENV_LOG_LEVEL)).unwrap_or(defaults.log_level);
        let log_dir = non_blank(lookup(ENV_LOG_DIR))
            .map(PathBuf::from)
            .filter(|path| path.is_absolute())
            .unwrap_or(defaults.log_dir);
        Self { log_level, log_dir }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use std::collections::HashMap;

    #[test]
    fn missing_values_use_defaults() {
        let config = CoreConfig::from_lookup(|_| None);
        assert_eq!(config, CoreConfig::default());
        assert!(config.log_dir.is_absolute());
    }

    #[test]
    fn overrides_are_trimmed_and_relative_dirs_ignored() {
        let vars = HashMap::from([
            (ENV_LOG_LEVEL, " warn ".to_string()),
            (ENV_LOG_DIR, "relative/logs".to_string()),
        ]);
        let config = CoreConfig::from_lookup(|key| vars.get(key).cloned());
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, CoreConfig::default().log_dir);
    }
}
