//! Dynamic value model for validated objects.
//!
//! Objects handed to [`Validator::validate`](crate::Validator::validate) are
//! trees of [`Value`]. Unlike `serde_json::Value` this type has a first-class
//! [`Value::Date`] variant, which the built-in `date` type checker matches.
//!
//! A field that does not exist in an object is *absent* and is represented as
//! `Option::<&Value>::None` throughout the crate. A present [`Value::Null`] is
//! a different thing: `required` treats both the same way, `max` does not.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::config::LengthMode;

/// Insertion-ordered field map of an object value.
pub type Record = IndexMap<String, Value>;

/// Key of the single-field JSON object that encodes a date (`{"$date": "..."}`).
pub const DATE_KEY: &str = "$date";

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Explicit null.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Any number; integers are stored as `f64`.
    Number(f64),
    /// UTF-8 string.
    String(String),
    /// Point in time.
    Date(DateTime<Utc>),
    /// Ordered sequence.
    Array(Vec<Value>),
    /// Field map.
    Object(Record),
}

impl Value {
    /// Creates an object value from `(key, value)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelcheck_validator::Value;
    ///
    /// let user = Value::object([("name", Value::from("Alex")), ("counter", Value::from(3))]);
    /// assert_eq!(user.get("name"), Some(&Value::from("Alex")));
    /// assert_eq!(user.get("missing"), None);
    /// ```
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Date(_) => "date",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string slice if this is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a [`Value::Number`].
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Looks up a field of an object. Non-object values have no fields.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(fields) => fields.get(key),
            _ => None,
        }
    }

    /// Inserts a field and returns the previous value of that field.
    ///
    /// A non-object value is replaced by an empty object first.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        if !matches!(self, Self::Object(_)) {
            *self = Self::Object(Record::new());
        }
        match self {
            Self::Object(fields) => fields.insert(key.into(), value.into()),
            _ => None,
        }
    }

    /// Builder form of [`Value::set`].
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Resolves the number that `min` / `max` bounds are compared against.
    ///
    /// Strings and arrays compare by length, numbers by value, booleans as
    /// `0` / `1` and dates as Unix milliseconds. Null and objects have no
    /// comparable.
    #[must_use]
    pub fn comparable(&self, mode: LengthMode) -> Option<f64> {
        match self {
            Self::String(s) => Some(mode.measure(s) as f64),
            Self::Array(items) => Some(items.len() as f64),
            Self::Number(n) => Some(*n),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Date(at) => Some(at.timestamp_millis() as f64),
            Self::Null | Self::Object(_) => None,
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Converts JSON one-to-one, except that `{"$date": "<RFC 3339>"}` becomes a
/// [`Value::Date`]. A `$date` object whose string does not parse stays an
/// object.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            Json::String(s) => Self::String(s),
            Json::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Json::Object(map) => {
                if let Some(at) = parse_date_object(&map) {
                    return Self::Date(at);
                }
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

fn parse_date_object(map: &serde_json::Map<String, serde_json::Value>) -> Option<DateTime<Utc>> {
    if map.len() != 1 {
        return None;
    }
    let raw = map.get(DATE_KEY)?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}
