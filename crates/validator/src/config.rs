//! Validator configuration.

use serde::{Deserialize, Serialize};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How `min` / `max` count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// VALIDATOR CONFIG
// ============================================================================

/// Configuration of a [`Validator`](crate::Validator).
///
/// Deserializes from a partial map; missing keys take their defaults.
///
/// ```
/// use modelcheck_validator::{LengthMode, ValidatorConfig};
///
/// let config: ValidatorConfig = serde_json::from_str(r#"{"length_mode": "bytes"}"#).unwrap();
/// assert_eq!(config.length_mode, LengthMode::Bytes);
/// assert!(config.allow_overwrite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// String length counting used by the built-in `min` / `max` rules.
    pub length_mode: LengthMode,
    /// Whether registering a model under an existing name replaces it.
    /// When `false` the second registration is ignored with a warning.
    pub allow_overwrite: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            length_mode: LengthMode::Chars,
            allow_overwrite: true,
        }
    }
}
