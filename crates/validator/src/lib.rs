//! # modelcheck-validator
//!
//! In-process object validation against named models.
//!
//! A *model* maps field names to a [`RuleSet`]. Four rules are built in:
//!
//! - `required`: the field must be present and non-null (evaluated first)
//! - `type`: the value must match a named type (`string`, `number`, `date`,
//!   `uuid`)
//! - `min` / `max`: bounds on a string's length, an array's size or a number
//!
//! ## Quick Start
//!
//! ```
//! use modelcheck_validator::prelude::*;
//!
//! let mut validator = Validator::new();
//! validator.register_model(
//!     "user",
//!     ModelSchema::new()
//!         .field("id", RuleSet::new().of_type("uuid").required(true))
//!         .field("counter", RuleSet::new().of_type("number").min(0).max(64)),
//! );
//!
//! let mut user = Value::object([
//!     ("id", Value::from("61cecfb4-da43-4b65-aaa0-f1c3be81ec53")),
//!     ("counter", Value::from(64)),
//! ]);
//! assert_eq!(validator.is_valid("user", &user), Some(true));
//!
//! user.set("counter", 65);
//! assert_eq!(validator.is_valid("user", &user), Some(false));
//!
//! validator.reset();
//! assert_eq!(validator.is_valid("user", &user), None);
//! ```
//!
//! ## Soft failures
//!
//! Nothing in the validation path returns an error. Unknown models and null
//! objects produce [`Validity::Indeterminate`]; unknown rules pass the field
//! and unknown types fail the `type` check. Each case is also emitted as a
//! `tracing` warning (see [`Diagnostic`]).

#![warn(missing_docs)]

pub mod checkers;
pub mod config;
pub mod engine;
pub mod foundation;
pub mod prelude;
pub mod registry;
pub mod schema;
pub mod validator;

pub use config::{LengthMode, ValidatorConfig};
pub use engine::{FieldOutcome, RuleEngine};
pub use foundation::{CheckContext, DATE_KEY, Diagnostic, Record, RuleChecker, TypeChecker, Value};
pub use registry::Registry;
pub use schema::{ModelSchema, RuleSet, RuleValue, SchemaError};
pub use validator::{SharedValidator, Validator, ValidatorBuilder, Validity, Violation};
