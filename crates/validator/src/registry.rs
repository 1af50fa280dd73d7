//! Registry of models, type checkers and rule checkers.
//!
//! A [`Registry`] is owned by a [`Validator`](crate::Validator); there is no
//! process-wide state. Every table is keyed by name and the last registration
//! under a name wins.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::checkers::{DateType, MaxRule, MinRule, NumberType, StringType, TypeRule, UuidType};
use crate::config::LengthMode;
use crate::foundation::{RuleChecker, TypeChecker};
use crate::schema::ModelSchema;

/// Named models and checkers.
pub struct Registry {
    models: IndexMap<String, ModelSchema>,
    types: HashMap<String, Box<dyn TypeChecker>>,
    rules: HashMap<String, Box<dyn RuleChecker>>,
}

impl Registry {
    /// Creates a registry with no models and no checkers.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            models: IndexMap::new(),
            types: HashMap::new(),
            rules: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in type checkers (`string`, `date`,
    /// `number`, `uuid`) and rule checkers (`type`, `min`, `max`).
    #[must_use]
    pub fn with_builtins(length_mode: LengthMode) -> Self {
        let mut registry = Self::empty();
        registry.register_type(StringType::NAME, StringType);
        registry.register_type(DateType::NAME, DateType);
        registry.register_type(NumberType::NAME, NumberType);
        registry.register_type(UuidType::NAME, UuidType);
        registry.register_rule(TypeRule::NAME, TypeRule);
        registry.register_rule(MinRule::NAME, MinRule::new(length_mode));
        registry.register_rule(MaxRule::NAME, MaxRule::new(length_mode));
        registry
    }

    // ------------------------------------------------------------------------
    // Models
    // ------------------------------------------------------------------------

    /// Stores `schema` under `name`, replacing any model of the same name.
    ///
    /// Any string is a valid name, including `""`.
    pub fn register_model(&mut self, name: impl Into<String>, schema: ModelSchema) {
        let name = name.into();
        let fields = schema.len();
        let replaced = self.models.insert(name.clone(), schema).is_some();
        debug!(model = %name, fields, replaced, "registered model");
    }

    /// Looks up a model.
    #[must_use]
    pub fn model(&self, name: &str) -> Option<&ModelSchema> {
        self.models.get(name)
    }

    /// Returns `true` if a model is registered under `name`.
    #[must_use]
    pub fn contains_model(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Registered model names, in first-registration order.
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Number of registered models.
    #[must_use]
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Removes every model. Checkers are kept.
    pub fn clear_models(&mut self) {
        let cleared = self.models.len();
        self.models.clear();
        debug!(cleared, "cleared models");
    }

    // ------------------------------------------------------------------------
    // Checkers
    // ------------------------------------------------------------------------

    /// Registers a type checker, replacing any checker of the same name.
    pub fn register_type(&mut self, name: impl Into<String>, checker: impl TypeChecker + 'static) {
        let name = name.into();
        let replaced = self.types.insert(name.clone(), Box::new(checker)).is_some();
        debug!(type_name = %name, replaced, "registered type checker");
    }

    /// Registers a rule checker, replacing any checker of the same name.
    ///
    /// `required` is evaluated by the engine itself; a checker registered
    /// under that name is never called.
    pub fn register_rule(&mut self, name: impl Into<String>, checker: impl RuleChecker + 'static) {
        let name = name.into();
        let replaced = self.rules.insert(name.clone(), Box::new(checker)).is_some();
        debug!(rule = %name, replaced, "registered rule checker");
    }

    /// Looks up a type checker.
    #[must_use]
    pub fn type_checker(&self, name: &str) -> Option<&dyn TypeChecker> {
        self.types.get(name).map(Box::as_ref)
    }

    /// Looks up a rule checker.
    #[must_use]
    pub fn rule_checker(&self, name: &str) -> Option<&dyn RuleChecker> {
        self.rules.get(name).map(Box::as_ref)
    }

    /// Returns `true` if a type checker is registered under `name`.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Returns `true` if a rule checker is registered under `name`.
    #[must_use]
    pub fn has_rule(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins(LengthMode::default())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<_> = self.types.keys().collect();
        types.sort();
        let mut rules: Vec<_> = self.rules.keys().collect();
        rules.sort();
        f.debug_struct("Registry")
            .field("models", &self.models.keys().collect::<Vec<_>>())
            .field("types", &types)
            .field("rules", &rules)
            .finish()
    }
}
