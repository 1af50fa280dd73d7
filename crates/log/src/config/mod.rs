//! Logger configuration

mod presets;

pub use presets::{FORMAT_VAR, LEVEL_VAR};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LogError;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level filter (e.g., "info", "modelcheck_validator=trace")
    pub level: String,

    /// Output format
    pub format: Format,

    /// Colored output
    pub ansi: bool,

    /// Include file and line of the call site
    pub source: bool,

    /// Include timestamps
    pub time: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: Format::Compact,
            ansi: false,
            source: false,
            time: true,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable multi-line output
    Pretty,
    /// Compact single-line output
    #[default]
    Compact,
    /// Structured JSON output, one object per line
    Json,
}

impl Format {
    /// Lowercase name as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(LogError::Format(s.to_string())),
        }
    }
}
