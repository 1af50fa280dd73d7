//! Checker traits.
//!
//! The engine dispatches on two kinds of named predicates:
//!
//! - [`TypeChecker`]: does a value have a given primitive kind
//! - [`RuleChecker`]: does a value satisfy one rule given the rule's value
//!
//! Both are implemented for plain functions and closures with the matching
//! signature, so custom checkers rarely need a dedicated type.

use crate::foundation::Value;
use crate::registry::Registry;
use crate::schema::RuleValue;

// ============================================================================
// TYPE CHECKER
// ============================================================================

/// A named predicate identifying whether a value matches a primitive kind.
///
/// Receives `None` when the field is absent.
///
/// ```
/// use modelcheck_validator::{TypeChecker, Value};
///
/// fn boolean(value: Option<&Value>) -> bool {
///     matches!(value, Some(Value::Bool(_)))
/// }
///
/// assert!(boolean.check(Some(&Value::Bool(true))));
/// assert!(!boolean.check(None));
/// ```
pub trait TypeChecker: Send + Sync {
    /// Returns `true` if the value is of this checker's type.
    fn check(&self, value: Option<&Value>) -> bool;
}

impl<F> TypeChecker for F
where
    F: Fn(Option<&Value>) -> bool + Send + Sync,
{
    fn check(&self, value: Option<&Value>) -> bool {
        self(value)
    }
}

// ============================================================================
// RULE CHECKER
// ============================================================================

/// A named predicate for one rule kind.
///
/// Receives the rule's configured value and the field value (`None` when
/// absent). Plain functions of `(&RuleValue, Option<&Value>) -> bool` get an
/// implementation that ignores the context.
pub trait RuleChecker: Send + Sync {
    /// Returns `true` if the value satisfies the rule.
    fn check(&self, rule: &RuleValue, value: Option<&Value>, cx: &CheckContext<'_>) -> bool;
}

impl<F> RuleChecker for F
where
    F: Fn(&RuleValue, Option<&Value>) -> bool + Send + Sync,
{
    fn check(&self, rule: &RuleValue, value: Option<&Value>, _cx: &CheckContext<'_>) -> bool {
        self(rule, value)
    }
}

// ============================================================================
// CHECK CONTEXT
// ============================================================================

/// What a rule checker can see besides the rule and the value.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    field: &'a str,
    registry: &'a Registry,
}

impl<'a> CheckContext<'a> {
    /// Creates a context for evaluating rules of `field`.
    #[must_use]
    pub fn new(field: &'a str, registry: &'a Registry) -> Self {
        Self { field, registry }
    }

    /// Name of the field being evaluated.
    #[must_use]
    pub fn field(&self) -> &'a str {
        self.field
    }

    /// Looks up a registered type checker.
    #[must_use]
    pub fn type_checker(&self, name: &str) -> Option<&'a dyn TypeChecker> {
        self.registry.type_checker(name)
    }
}
