//! Core building blocks shared by the registry, the engine and the façade.
//!
//! - **Values**: [`Value`], [`Record`]
//! - **Traits**: [`TypeChecker`], [`RuleChecker`], [`CheckContext`]
//! - **Diagnostics**: [`Diagnostic`]

pub mod diagnostic;
pub mod traits;
pub mod value;

pub use diagnostic::Diagnostic;
pub use traits::{CheckContext, RuleChecker, TypeChecker};
pub use value::{DATE_KEY, Record, Value};
