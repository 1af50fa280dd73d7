//! Prelude module for convenient imports.
//!
//! ```
//! use modelcheck_validator::prelude::*;
//!
//! let validator = Validator::builder().length_mode(LengthMode::Bytes).build();
//! assert_eq!(validator.config().length_mode, LengthMode::Bytes);
//! ```

pub use crate::config::{LengthMode, ValidatorConfig};
pub use crate::foundation::{Diagnostic, Record, RuleChecker, TypeChecker, Value};
pub use crate::schema::{ModelSchema, RuleSet, RuleValue};
pub use crate::validator::{SharedValidator, Validator, Validity, Violation};
