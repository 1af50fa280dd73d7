//! The validator façade.
//!
//! [`Validator`] owns a [`Registry`] and a [`ValidatorConfig`]; models are
//! registered once and objects validated many times:
//!
//! ```
//! use modelcheck_validator::{ModelSchema, RuleSet, Validator, Value};
//!
//! let mut validator = Validator::new();
//! validator.register_model(
//!     "user",
//!     ModelSchema::new()
//!         .field("id", RuleSet::new().of_type("uuid").required(true))
//!         .field("name", RuleSet::new().of_type("string").min(1).max(64)),
//! );
//!
//! let user = Value::object([
//!     ("id", Value::from("61cecfb4-da43-4b65-aaa0-f1c3be81ec53")),
//!     ("name", Value::from("Alex Bardanov")),
//! ]);
//! assert!(validator.validate("user", &user).is_valid());
//! assert!(validator.validate("order", &user).is_indeterminate());
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

use crate::config::{LengthMode, ValidatorConfig};
use crate::engine::{FieldOutcome, RuleEngine};
use crate::foundation::{Diagnostic, RuleChecker, TypeChecker, Value};
use crate::registry::Registry;
use crate::schema::{ModelSchema, RuleSet, SchemaError};

// ============================================================================
// VALIDITY
// ============================================================================

/// Outcome of validating an object against a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// Every field satisfied its rules.
    Valid,
    /// A field failed; validation stopped there.
    Invalid(Violation),
    /// Validation could not run: unknown model or null object.
    Indeterminate(Diagnostic),
}

impl Validity {
    /// Returns `true` for [`Validity::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns `true` for [`Validity::Invalid`].
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns `true` for [`Validity::Indeterminate`].
    #[must_use]
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Indeterminate(_))
    }

    /// `Some(true)` if valid, `Some(false)` if invalid, `None` if
    /// indeterminate.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Valid => Some(true),
            Self::Invalid(_) => Some(false),
            Self::Indeterminate(_) => None,
        }
    }

    /// The failing field and rule, if invalid.
    #[must_use]
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Invalid(violation) => Some(violation),
            _ => None,
        }
    }

    /// The reason validation could not run, if indeterminate.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Indeterminate(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::Invalid(violation) => write!(f, "invalid ({violation})"),
            Self::Indeterminate(diagnostic) => write!(f, "indeterminate ({diagnostic})"),
        }
    }
}

/// The first field that failed and the rule it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field name.
    pub field: String,
    /// Rule name.
    pub rule: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}' failed rule '{}'", self.field, self.rule)
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Registers models and validates objects against them.
#[derive(Debug, Default)]
pub struct Validator {
    registry: Registry,
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the default configuration and the built-in
    /// checkers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Creates a validator with the built-in checkers.
    #[must_use]
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            registry: Registry::with_builtins(config.length_mode),
            config,
        }
    }

    /// Starts a [`ValidatorBuilder`].
    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Read access to the registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registers a model under `name`.
    ///
    /// An empty name is ignored. An existing model of the same name is
    /// replaced unless [`ValidatorConfig::allow_overwrite`] is off, in which
    /// case the new definition is ignored.
    pub fn register_model(&mut self, name: impl Into<String>, schema: ModelSchema) {
        let name = name.into();
        if !self.config.allow_overwrite && self.registry.contains_model(&name) {
            warn!(model = %name, "model already registered, keeping the existing definition");
            return;
        }
        self.registry.register_model(name, schema);
    }

    /// Registers a model from its JSON form. A JSON `null` is ignored.
    pub fn register_model_json(
        &mut self,
        name: impl Into<String>,
        schema: &serde_json::Value,
    ) -> Result<(), SchemaError> {
        if schema.is_null() {
            debug!("ignoring model registration without a schema");
            return Ok(());
        }
        let schema = ModelSchema::from_json(schema)?;
        self.register_model(name, schema);
        Ok(())
    }

    /// Registers a type checker usable from `type` rules.
    pub fn register_type(&mut self, name: impl Into<String>, checker: impl TypeChecker + 'static) {
        self.registry.register_type(name, checker);
    }

    /// Registers a rule checker.
    pub fn register_rule(&mut self, name: impl Into<String>, checker: impl RuleChecker + 'static) {
        self.registry.register_rule(name, checker);
    }

    /// Unregisters every model. Checkers are kept.
    pub fn reset(&mut self) {
        self.registry.clear_models();
    }

    /// Validates `object` against the model registered under `model`.
    ///
    /// Fields are checked in declaration order and validation stops at the
    /// first failing field. An unknown model or a null object yields
    /// [`Validity::Indeterminate`].
    pub fn validate(&self, model: &str, object: &Value) -> Validity {
        let Some(schema) = self.registry.model(model) else {
            return indeterminate(Diagnostic::UnknownModel {
                model: model.to_owned(),
            });
        };

        if object.is_null() {
            return indeterminate(Diagnostic::NullTarget {
                model: model.to_owned(),
            });
        }

        let engine = RuleEngine::new(&self.registry);
        for (field, rules) in schema.fields() {
            if let FieldOutcome::Fail { rule } = engine.evaluate_field(field, object.get(field), rules) {
                debug!(model, field, rule = %rule, "object failed validation");
                return Validity::Invalid(Violation {
                    field: field.to_owned(),
                    rule,
                });
            }
        }

        Validity::Valid
    }

    /// Boolean projection of [`Validator::validate`]; `None` when
    /// indeterminate.
    pub fn is_valid(&self, model: &str, object: &Value) -> Option<bool> {
        self.validate(model, object).as_bool()
    }

    /// Lists the rules and types in `schema` that no checker is registered
    /// for, without emitting anything.
    ///
    /// ```
    /// use modelcheck_validator::{Diagnostic, ModelSchema, RuleSet, Validator};
    ///
    /// let schema = ModelSchema::new()
    ///     .field("id", RuleSet::new().of_type("ulid"))
    ///     .field("tags", RuleSet::new().rule("unique", true));
    ///
    /// let found = Validator::new().audit(&schema);
    /// assert_eq!(found.len(), 2);
    /// assert_eq!(found[0].code(), "unknown_type");
    /// assert_eq!(found[1].code(), "unknown_rule");
    /// ```
    pub fn audit(&self, schema: &ModelSchema) -> Vec<Diagnostic> {
        let mut found = Vec::new();
        for (field, rules) in schema.fields() {
            for (name, rule) in rules.evaluation_order() {
                if name == RuleSet::REQUIRED {
                    continue;
                }
                if !self.registry.has_rule(name) {
                    found.push(Diagnostic::UnknownRule {
                        field: field.to_owned(),
                        rule: name.to_owned(),
                    });
                    // The engine stops at an unknown rule.
                    break;
                }
                if name == RuleSet::TYPE && !rule.as_text().is_some_and(|t| self.registry.has_type(t)) {
                    found.push(Diagnostic::UnknownType {
                        field: field.to_owned(),
                        type_name: rule.to_string(),
                    });
                }
            }
        }
        found
    }
}

fn indeterminate(diagnostic: Diagnostic) -> Validity {
    diagnostic.emit();
    Validity::Indeterminate(diagnostic)
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for a [`Validator`] with custom checkers and initial models.
///
/// Built-in checkers are installed first, so a custom checker registered
/// under a built-in name replaces it.
#[derive(Default)]
pub struct ValidatorBuilder {
    config: ValidatorConfig,
    types: Vec<(String, Box<dyn TypeChecker>)>,
    rules: Vec<(String, Box<dyn RuleChecker>)>,
    models: Vec<(String, ModelSchema)>,
}

impl ValidatorBuilder {
    /// Creates a builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets how `min` / `max` measure strings.
    pub fn length_mode(mut self, mode: LengthMode) -> Self {
        self.config.length_mode = mode;
        self
    }

    /// Sets whether re-registering a model replaces it.
    pub fn allow_overwrite(mut self, allow: bool) -> Self {
        self.config.allow_overwrite = allow;
        self
    }

    /// Adds a type checker.
    pub fn with_type(mut self, name: impl Into<String>, checker: impl TypeChecker + 'static) -> Self {
        self.types.push((name.into(), Box::new(checker)));
        self
    }

    /// Adds a rule checker.
    pub fn with_rule(mut self, name: impl Into<String>, checker: impl RuleChecker + 'static) -> Self {
        self.rules.push((name.into(), Box::new(checker)));
        self
    }

    /// Adds a model.
    pub fn with_model(mut self, name: impl Into<String>, schema: ModelSchema) -> Self {
        self.models.push((name.into(), schema));
        self
    }

    /// Builds the validator.
    pub fn build(self) -> Validator {
        let mut validator = Validator::with_config(self.config);
        for (name, checker) in self.types {
            validator.registry.register_type(name, BoxedType(checker));
        }
        for (name, checker) in self.rules {
            validator.registry.register_rule(name, BoxedRule(checker));
        }
        for (name, schema) in self.models {
            validator.register_model(name, schema);
        }
        validator
    }
}

impl fmt::Debug for ValidatorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("config", &self.config)
            .field("types", &self.types.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .field("rules", &self.rules.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .field("models", &self.models.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .finish()
    }
}

struct BoxedType(Box<dyn TypeChecker>);

impl TypeChecker for BoxedType {
    fn check(&self, value: Option<&Value>) -> bool {
        self.0.check(value)
    }
}

struct BoxedRule(Box<dyn RuleChecker>);

impl RuleChecker for BoxedRule {
    fn check(
        &self,
        rule: &crate::schema::RuleValue,
        value: Option<&Value>,
        cx: &crate::foundation::CheckContext<'_>,
    ) -> bool {
        self.0.check(rule, value, cx)
    }
}

// ============================================================================
// SHARED VALIDATOR
// ============================================================================

/// A [`Validator`] behind `Arc<RwLock<_>>` for use across threads.
///
/// Validation takes a read lock and may run concurrently; registration and
/// reset take the write lock.
#[derive(Debug, Clone, Default)]
pub struct SharedValidator {
    inner: Arc<RwLock<Validator>>,
}

impl SharedValidator {
    /// Wraps a validator.
    #[must_use]
    pub fn new(validator: Validator) -> Self {
        Self {
            inner: Arc::new(RwLock::new(validator)),
        }
    }

    /// See [`Validator::register_model`].
    pub fn register_model(&self, name: impl Into<String>, schema: ModelSchema) {
        self.inner.write().register_model(name, schema);
    }

    /// See [`Validator::reset`].
    pub fn reset(&self) {
        self.inner.write().reset();
    }

    /// See [`Validator::validate`].
    pub fn validate(&self, model: &str, object: &Value) -> Validity {
        self.inner.read().validate(model, object)
    }

    /// Shared access for several calls under one lock.
    pub fn read(&self) -> RwLockReadGuard<'_, Validator> {
        self.inner.read()
    }

    /// Exclusive access for several calls under one lock.
    pub fn write(&self) -> RwLockWriteGuard<'_, Validator> {
        self.inner.write()
    }
}

impl From<Validator> for SharedValidator {
    fn from(validator: Validator) -> Self {
        Self::new(validator)
    }
}
