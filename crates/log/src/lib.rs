//! # modelcheck-log
//!
//! Subscriber setup for modelcheck binaries. Libraries in the workspace only
//! emit `tracing` events; a binary calls one of the init functions once.
//!
//! ```no_run
//! use modelcheck_log::{Config, Format};
//!
//! let config = Config {
//!     level: "info,modelcheck_validator=debug".into(),
//!     format: Format::Json,
//!     ..Config::default()
//! };
//! modelcheck_log::init_with(config)?;
//! # Ok::<(), modelcheck_log::LogError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;

pub use builder::LoggerBuilder;
pub use config::{Config, FORMAT_VAR, Format, LEVEL_VAR};

/// Errors raised while installing the logger
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Filter parsing error
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The rejected filter string
        filter: String,
        /// Parser message
        reason: String,
    },

    /// Unrecognized format name
    #[error("unknown log format '{0}'")]
    Format(String),

    /// A global subscriber was installed before
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Result type for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Auto-detect and initialize the best logging configuration
///
/// Uses the environment when `MODELCHECK_LOG` or `RUST_LOG` is set, the
/// development preset in debug builds and the production preset otherwise.
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn auto_init() -> LogResult<()> {
    let from_env = [LEVEL_VAR, "RUST_LOG"]
        .iter()
        .any(|key| std::env::var_os(key).is_some());

    if from_env {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init() -> LogResult<()> {
    init_with(Config::default())
}

/// Initialize with custom configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}
