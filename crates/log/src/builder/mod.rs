//! Logger builder implementation

#[macro_use]
mod format;

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::{LogError, LogResult};

/// Logger builder
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Override the level filter
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    /// Override the output format
    #[must_use]
    pub fn format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    /// The configuration that [`LoggerBuilder::build`] will install.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses the level filter without installing anything.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if the filter string cannot be parsed.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Build and install the global subscriber, writing to stderr
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;

        let installed = match self.config.format {
            Format::Pretty => {
                try_init_layer!(filter, tracing_subscriber::fmt::layer().pretty(), self.config)
            }
            Format::Compact => {
                try_init_layer!(filter, tracing_subscriber::fmt::layer().compact(), self.config)
            }
            Format::Json => try_init_layer!(
                filter,
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true),
                self.config
            ),
        };

        installed.map_err(|_| LogError::AlreadyInitialized)?;
        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger installed"
        );
        Ok(())
    }
}
