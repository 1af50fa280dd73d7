//! Built-in rule checkers: `type`, `min` and `max`.

use crate::config::LengthMode;
use crate::foundation::{CheckContext, Diagnostic, RuleChecker, Value};
use crate::schema::{RuleSet, RuleValue};

// ============================================================================
// TYPE RULE
// ============================================================================

/// Dispatches to the type checker named by the rule value.
///
/// An unregistered type name (or a non-text rule value) emits
/// [`Diagnostic::UnknownType`] and fails the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TypeRule;

impl TypeRule {
    /// Registered name.
    pub const NAME: &'static str = RuleSet::TYPE;
}

impl RuleChecker for TypeRule {
    fn check(&self, rule: &RuleValue, value: Option<&Value>, cx: &CheckContext<'_>) -> bool {
        match rule.as_text().and_then(|name| cx.type_checker(name)) {
            Some(checker) => checker.check(value),
            None => {
                Diagnostic::UnknownType {
                    field: cx.field().to_owned(),
                    type_name: rule.to_string(),
                }
                .emit();
                false
            }
        }
    }
}

// ============================================================================
// MIN / MAX
// ============================================================================

/// Lower bound on a value's comparable (`>=`).
///
/// Fails when the field is absent, has no comparable, or the bound is not a
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MinRule {
    mode: LengthMode,
}

impl MinRule {
    /// Registered name.
    pub const NAME: &'static str = RuleSet::MIN;

    /// Creates a `min` checker measuring strings with `mode`.
    #[must_use]
    pub fn new(mode: LengthMode) -> Self {
        Self { mode }
    }
}

impl RuleChecker for MinRule {
    fn check(&self, rule: &RuleValue, value: Option<&Value>, _cx: &CheckContext<'_>) -> bool {
        value.is_some_and(|value| compare(rule, value, self.mode, |actual, min| actual >= min))
    }
}

/// Upper bound on a value's comparable (`<=`).
///
/// Passes when the field is absent. Otherwise fails when the value has no
/// comparable or the bound is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaxRule {
    mode: LengthMode,
}

impl MaxRule {
    /// Registered name.
    pub const NAME: &'static str = RuleSet::MAX;

    /// Creates a `max` checker measuring strings with `mode`.
    #[must_use]
    pub fn new(mode: LengthMode) -> Self {
        Self { mode }
    }
}

impl RuleChecker for MaxRule {
    fn check(&self, rule: &RuleValue, value: Option<&Value>, _cx: &CheckContext<'_>) -> bool {
        value.is_none_or(|value| compare(rule, value, self.mode, |actual, max| actual <= max))
    }
}

fn compare(
    rule: &RuleValue,
    value: &Value,
    mode: LengthMode,
    holds: impl FnOnce(f64, f64) -> bool,
) -> bool {
    match (value.comparable(mode), rule.as_number()) {
        (Some(actual), Some(bound)) => holds(actual, bound),
        _ => false,
    }
}
