//! Soft validation diagnostics.
//!
//! Nothing in the validation path raises an error. Conditions that stop a
//! model from being evaluated, or that make a rule unevaluable, are reported
//! as a [`Diagnostic`]: emitted as a `tracing` warning and, for the two
//! conditions that make the whole result indeterminate, returned inside
//! [`Validity::Indeterminate`](crate::Validity::Indeterminate).

use thiserror::Error;

/// A non-fatal condition found while validating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// `validate` was called with a model name that is not registered.
    #[error("there is no model registered for type \"{model}\"")]
    UnknownModel {
        /// Requested model name.
        model: String,
    },

    /// `validate` was called with a null object.
    #[error("object for validation against \"{model}\" is null")]
    NullTarget {
        /// Model the object was validated against.
        model: String,
    },

    /// A rule set names a rule with no registered checker. The field passes.
    #[error("unknown rule \"{rule}\" on field \"{field}\", field treated as valid")]
    UnknownRule {
        /// Field whose rule set contains the rule.
        field: String,
        /// Unknown rule name.
        rule: String,
    },

    /// A `type` rule names a type with no registered checker. The check fails.
    #[error("unknown type \"{type_name}\" on field \"{field}\"")]
    UnknownType {
        /// Field whose rule set contains the `type` rule.
        field: String,
        /// Unknown type name.
        type_name: String,
    },
}

impl Diagnostic {
    /// Stable machine-readable code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownModel { .. } => "unknown_model",
            Self::NullTarget { .. } => "null_target",
            Self::UnknownRule { .. } => "unknown_rule",
            Self::UnknownType { .. } => "unknown_type",
        }
    }

    /// Emits this diagnostic as a `tracing` warning.
    pub fn emit(&self) {
        match self {
            Self::UnknownModel { model } | Self::NullTarget { model } => {
                tracing::warn!(code = self.code(), model = %model, "{}", self);
            }
            Self::UnknownRule { field, rule } => {
                tracing::warn!(code = self.code(), field = %field, rule = %rule, "{}", self);
            }
            Self::UnknownType { field, type_name } => {
                tracing::warn!(
                    code = self.code(),
                    field = %field,
                    type_name = %type_name,
                    "{}",
                    self
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_subject() {
        let d = Diagnostic::UnknownModel {
            model: "user".into(),
        };
        assert_eq!(d.to_string(), "there is no model registered for type \"user\"");
        assert_eq!(d.code(), "unknown_model");

        let d = Diagnostic::UnknownType {
            field: "id".into(),
            type_name: "ulid".into(),
        };
        assert!(d.to_string().contains("ulid"));
        assert_eq!(d.code(), "unknown_type");
    }

    #[test]
    fn emit_without_subscriber_is_a_noop() {
        Diagnostic::NullTarget {
            model: "user".into(),
        }
        .emit();
    }
}
