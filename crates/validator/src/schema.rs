//! Model definitions: rule values, field rule sets and model schemas.
//!
//! All three types keep declaration order, which is the order the engine
//! visits rules (after `required`) and fields in. They deserialize from plain
//! maps:
//!
//! ```
//! use modelcheck_validator::{ModelSchema, RuleSet};
//!
//! let schema: ModelSchema = serde_json::from_value(serde_json::json!({
//!     "id":   { "type": "uuid", "required": true },
//!     "name": { "type": "string", "min": 1, "max": 64 }
//! }))
//! .unwrap();
//!
//! assert_eq!(schema.len(), 2);
//! assert_eq!(schema.get("id"), Some(&RuleSet::new().of_type("uuid").required(true)));
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// RULE VALUE
// ============================================================================

/// The value a rule is configured with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// Flag, e.g. `required: true`.
    Bool(bool),
    /// Threshold, e.g. `min: 1`.
    Number(f64),
    /// Name, e.g. `type: "uuid"`.
    Text(String),
}

impl RuleValue {
    /// Truthiness used by `required`: `false`, `0`, `NaN` and `""` are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// Reads the value as a numeric threshold.
    ///
    /// Text is parsed as a decimal number, booleans read as `0` / `1`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Returns the name if this is [`RuleValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for RuleValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for RuleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RuleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for RuleValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for RuleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RuleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// The rules applied to one field, keyed by rule name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: IndexMap<String, RuleValue>,
}

impl RuleSet {
    /// Name of the rule checking the value's type.
    pub const TYPE: &'static str = "type";
    /// Name of the presence rule; always evaluated first.
    pub const REQUIRED: &'static str = "required";
    /// Name of the lower-bound rule.
    pub const MIN: &'static str = "min";
    /// Name of the upper-bound rule.
    pub const MAX: &'static str = "max";

    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a rule by name.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, name: impl Into<String>, value: impl Into<RuleValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a `type` rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn of_type(self, type_name: impl Into<String>) -> Self {
        self.rule(Self::TYPE, RuleValue::Text(type_name.into()))
    }

    /// Adds a `required` rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(self, required: bool) -> Self {
        self.rule(Self::REQUIRED, required)
    }

    /// Adds a `min` rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(self, min: impl Into<RuleValue>) -> Self {
        self.rule(Self::MIN, min)
    }

    /// Adds a `max` rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(self, max: impl Into<RuleValue>) -> Self {
        self.rule(Self::MAX, max)
    }

    /// Inserts a rule, returning the value it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<RuleValue>,
    ) -> Option<RuleValue> {
        self.rules.insert(name.into(), value.into())
    }

    /// Looks up a rule value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RuleValue> {
        self.rules.get(name)
    }

    /// Returns `true` if a rule with this name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleValue)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Rules in evaluation order: `required` first, then the remaining rules
    /// in declaration order.
    pub fn evaluation_order(&self) -> impl Iterator<Item = (&str, &RuleValue)> {
        let required = self
            .rules
            .get_key_value(Self::REQUIRED)
            .map(|(k, v)| (k.as_str(), v));
        required.into_iter().chain(self.iter().filter(|(name, _)| *name != Self::REQUIRED))
    }
}

impl<K: Into<String>, V: Into<RuleValue>> FromIterator<(K, V)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

// ============================================================================
// MODEL SCHEMA
// ============================================================================

/// A model definition: field name to rule set, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelSchema {
    fields: IndexMap<String, RuleSet>,
}

impl ModelSchema {
    /// Creates a schema with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, rules: RuleSet) -> Self {
        self.insert(name, rules);
        self
    }

    /// Declares a field, returning the rule set it replaced. A replaced
    /// field keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, rules: RuleSet) -> Option<RuleSet> {
        self.fields.insert(name.into(), rules)
    }

    /// Rule set of a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&RuleSet> {
        self.fields.get(field)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &RuleSet)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Deserializes a schema from a JSON value.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, SchemaError> {
        Ok(Self::deserialize(value)?)
    }
}

impl<K: Into<String>> FromIterator<(K, RuleSet)> for ModelSchema {
    fn from_iter<I: IntoIterator<Item = (K, RuleSet)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// A schema could not be built from its serialized form.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The JSON did not describe a map of field names to rule maps.
    #[error("invalid model schema: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn required_is_visited_first() {
        let rules = RuleSet::new().of_type("string").min(1).required(true).max(3);
        let order: Vec<_> = rules.evaluation_order().map(|(name, _)| name).collect();
        assert_eq!(order, ["required", "type", "min", "max"]);
    }

    #[test]
    fn evaluation_order_without_required_is_declaration_order() {
        let rules = RuleSet::new().max(3).of_type("string");
        let order: Vec<_> = rules.evaluation_order().map(|(name, _)| name).collect();
        assert_eq!(order, ["max", "type"]);
    }

    #[test]
    fn truthiness() {
        assert!(RuleValue::Bool(true).is_truthy());
        assert!(!RuleValue::Bool(false).is_truthy());
        assert!(!RuleValue::Number(0.0).is_truthy());
        assert!(!RuleValue::Number(f64::NAN).is_truthy());
        assert!(RuleValue::Number(-1.0).is_truthy());
        assert!(!RuleValue::Text(String::new()).is_truthy());
        assert!(RuleValue::Text("no".into()).is_truthy());
    }

    #[test]
    fn numeric_reading() {
        assert_eq!(RuleValue::from(4).as_number(), Some(4.0));
        assert_eq!(RuleValue::from(" 2.5 ").as_number(), Some(2.5));
        assert_eq!(RuleValue::from("many").as_number(), None);
        assert_eq!(RuleValue::from(true).as_number(), Some(1.0));
    }

    #[test]
    fn rule_values_deserialize_untagged() {
        let rules: RuleSet =
            serde_json::from_value(json!({"type": "date", "required": false, "min": 2}))
                .unwrap();
        assert_eq!(rules.get("type"), Some(&RuleValue::Text("date".into())));
        assert_eq!(rules.get("required"), Some(&RuleValue::Bool(false)));
        assert_eq!(rules.get("min"), Some(&RuleValue::Number(2.0)));
    }

    #[test]
    fn schema_from_json_rejects_non_map() {
        let err = ModelSchema::from_json(&json!(["id"])).unwrap_err();
        assert!(err.to_string().starts_with("invalid model schema"));
    }

    #[test]
    fn schema_keeps_field_order() {
        let schema = ModelSchema::new()
            .field("z", RuleSet::new())
            .field("a", RuleSet::new())
            .field("m", RuleSet::new());
        let names: Vec<_> = schema.field_names().collect();
        assert_eq!(names, ["z", "a", "m"]);
    }

    #[test]
    fn display_rule_values() {
        assert_eq!(RuleValue::from(64).to_string(), "64");
        assert_eq!(RuleValue::from("uuid").to_string(), "uuid");
        assert_eq!(RuleValue::from(false).to_string(), "false");
    }
}
