//! Built-in checkers.
//!
//! - **Types**: [`StringType`], [`NumberType`], [`DateType`], [`UuidType`]
//! - **Rules**: [`TypeRule`], [`MinRule`], [`MaxRule`]
//!
//! `required` has no checker; the engine evaluates it before any other rule.

pub mod bounds;
pub mod types;

pub use bounds::{MaxRule, MinRule, TypeRule};
pub use types::{DateType, NumberType, StringType, UuidType};

/// Names of the built-in type checkers.
pub const BUILTIN_TYPES: [&str; 4] = [
    StringType::NAME,
    DateType::NAME,
    NumberType::NAME,
    UuidType::NAME,
];

/// Names of the built-in rule checkers.
pub const BUILTIN_RULES: [&str; 3] = [TypeRule::NAME, MinRule::NAME, MaxRule::NAME];
