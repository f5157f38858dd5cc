//! Tracing subscriber initialisation.
//!
//! `RUST_LOG` wins when set; otherwise the configured filter applies.

use tracing_subscriber::{
    EnvFilter, filter::ParseError, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

/// Errors raised while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        /// Directive that failed to parse.
        directive: String,
        /// Parser error.
        source: ParseError,
    },

    /// A global subscriber is already installed.
    #[error("failed to initialise tracing: {0}")]
    Init(#[from] TryInitError),
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns [`LoggingError`] when the filter is invalid or a subscriber was
/// already registered.
pub fn init_logging(default_filter: &str) -> Result<(), LoggingError> {
    let filter = resolve_filter(
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        default_filter,
    )?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()?;
    Ok(())
}

fn resolve_filter(
    env_directive: Option<String>,
    default_filter: &str,
) -> Result<EnvFilter, LoggingError> {
    let directive = env_directive
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default_filter.to_owned());
    EnvFilter::try_new(&directive).map_err(|source| LoggingError::InvalidFilter {
        directive,
        source,
    })
}
