//! Built-in type checkers.
//!
//! Every built-in type rejects an absent value.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{TypeChecker, Value};

// ============================================================================
// PRIMITIVE KINDS
// ============================================================================

/// Matches [`Value::String`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StringType;

impl StringType {
    /// Registered name.
    pub const NAME: &'static str = "string";
}

impl TypeChecker for StringType {
    fn check(&self, value: Option<&Value>) -> bool {
        matches!(value, Some(Value::String(_)))
    }
}

/// Matches [`Value::Number`], including NaN and infinities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberType;

impl NumberType {
    /// Registered name.
    pub const NAME: &'static str = "number";
}

impl TypeChecker for NumberType {
    fn check(&self, value: Option<&Value>) -> bool {
        matches!(value, Some(Value::Number(_)))
    }
}

/// Matches [`Value::Date`]. Date-like strings are not dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateType;

impl DateType {
    /// Registered name.
    pub const NAME: &'static str = "date";
}

impl TypeChecker for DateType {
    fn check(&self, value: Option<&Value>) -> bool {
        matches!(value, Some(Value::Date(_)))
    }
}

// ============================================================================
// UUID
// ============================================================================

// 8-4-4-4-12 hex, version nibble 1-5, variant nibble 8/9/a/b.
static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("uuid pattern compiles")
});

/// Matches strings in canonical RFC 4122 form, versions 1 to 5.
///
/// Hex digits are case-insensitive. Braced, URN and hyphenless forms are
/// rejected, as are all non-string values.
///
/// ```
/// use modelcheck_validator::checkers::UuidType;
/// use modelcheck_validator::{TypeChecker, Value};
///
/// let uuid = UuidType;
/// assert!(uuid.check(Some(&Value::from("61cecfb4-da43-4b65-aaa0-f1c3be81ec53"))));
/// assert!(!uuid.check(Some(&Value::from("61cecfb4-da43-6b65-aaa0-f1c3be81ec53"))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UuidType;

impl UuidType {
    /// Registered name.
    pub const NAME: &'static str = "uuid";

    /// Returns `true` if `input` is a canonical UUID string.
    #[must_use]
    pub fn matches(input: &str) -> bool {
        UUID_REGEX.is_match(input)
    }
}

impl TypeChecker for UuidType {
    fn check(&self, value: Option<&Value>) -> bool {
        value.and_then(Value::as_str).is_some_and(Self::matches)
    }
}
