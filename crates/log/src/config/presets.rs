//! Configuration presets for common scenarios

use super::{Config, Format};

/// Level filter variable, checked before `RUST_LOG`.
pub const LEVEL_VAR: &str = "MODELCHECK_LOG";

/// Output format variable.
pub const FORMAT_VAR: &str = "MODELCHECK_LOG_FORMAT";

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable lookup.
    ///
    /// An unrecognized format keeps the default.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(LEVEL_VAR).or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup(FORMAT_VAR) {
            config.format = format.parse().unwrap_or(config.format);
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            ansi: true,
            source: true,
            ..Self::default()
        }
    }

    /// Production configuration (JSON, warn level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "warn".to_string(),
            format: Format::Json,
            ansi: false,
            source: false,
            ..Self::default()
        }
    }
}
