//! Per-field rule evaluation.
//!
//! [`RuleEngine::evaluate_field`] runs one field's [`RuleSet`] against one
//! value:
//!
//! 1. `required` is visited first. If truthy and the value is absent or null,
//!    the field fails.
//! 2. Remaining rules run in declaration order. A rule with no registered
//!    checker emits [`Diagnostic::UnknownRule`] and the field *passes*
//!    without looking at further rules.
//! 3. The first failing rule fails the field.

use tracing::trace;

use crate::foundation::{CheckContext, Diagnostic, Value};
use crate::registry::Registry;
use crate::schema::RuleSet;

/// Result of evaluating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Every visited rule held.
    Pass,
    /// A rule failed.
    Fail {
        /// Name of the failing rule.
        rule: String,
    },
}

impl FieldOutcome {
    /// Returns `true` for [`FieldOutcome::Pass`].
    #[must_use]
    pub fn passed(&self) -> bool {
        matches!(self, Self::Pass)
    }

    fn fail(rule: &str) -> Self {
        Self::Fail {
            rule: rule.to_owned(),
        }
    }
}

/// Evaluates rule sets against values using the checkers of a [`Registry`].
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'r> {
    registry: &'r Registry,
}

impl<'r> RuleEngine<'r> {
    /// Creates an engine over `registry`.
    #[must_use]
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Evaluates `rules` against the value of `field` (`None` if absent).
    ///
    /// ```
    /// use modelcheck_validator::{FieldOutcome, Registry, RuleEngine, RuleSet, Value};
    ///
    /// let registry = Registry::default();
    /// let engine = RuleEngine::new(&registry);
    /// let rules = RuleSet::new().of_type("string").min(1).max(64);
    ///
    /// assert!(engine.evaluate_field("name", Some(&Value::from("Alex")), &rules).passed());
    /// assert_eq!(
    ///     engine.evaluate_field("name", Some(&Value::from("")), &rules),
    ///     FieldOutcome::Fail { rule: "min".into() },
    /// );
    /// ```
    pub fn evaluate_field(&self, field: &str, value: Option<&Value>, rules: &RuleSet) -> FieldOutcome {
        let cx = CheckContext::new(field, self.registry);

        for (name, rule) in rules.evaluation_order() {
            if name == RuleSet::REQUIRED {
                if rule.is_truthy() && value.is_none_or(Value::is_null) {
                    trace!(field, "required value is missing");
                    return FieldOutcome::fail(name);
                }
                continue;
            }

            let Some(checker) = self.registry.rule_checker(name) else {
                Diagnostic::UnknownRule {
                    field: field.to_owned(),
                    rule: name.to_owned(),
                }
                .emit();
                return FieldOutcome::Pass;
            };

            let holds = checker.check(rule, value, &cx);
            trace!(field, rule = name, setting = %rule, holds, "evaluated rule");
            if !holds {
                return FieldOutcome::fail(name);
            }
        }

        FieldOutcome::Pass
    }
}
