//! Process configuration loaded from `TASKBOARD_*` environment variables.
//!
//! | Variable                        | Default          |
//! |---------------------------------|------------------|
//! | `TASKBOARD_BIND_ADDRESS`        | `127.0.0.1:8080` |
//! | `TASKBOARD_DATABASE_URL`        | unset            |
//! | `TASKBOARD_DATABASE_POOL_SIZE`  | `10`             |
//! | `TASKBOARD_LOG_FILTER`          | `info`           |
//!
//! Leaving the database URL unset selects in-memory storage.

use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "TASKBOARD";

/// Default listen address.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Default maximum number of pooled database connections.
pub const DEFAULT_DATABASE_POOL_SIZE: u32 = 10;

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum AppConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The pool must hold at least one connection.
    #[error("database pool size must be at least 1")]
    InvalidPoolSize,
}

/// Settings for the task server process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Socket address the HTTP listener binds to.
    pub bind_address: String,
    /// `PostgreSQL` connection URL. `None` selects in-memory storage.
    pub database_url: Option<String>,
    /// Maximum pooled `PostgreSQL` connections.
    pub database_pool_size: u32,
    /// Fallback `tracing` filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_owned(),
            database_url: None,
            database_pool_size: DEFAULT_DATABASE_POOL_SIZE,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`AppConfigError`] when a variable cannot be parsed or a value
    /// is out of range.
    pub fn load() -> Result<Self, AppConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(environment: Environment) -> Result<Self, AppConfigError> {
        let mut loaded: Self = Config::builder()
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;

        if loaded
            .database_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            loaded.database_url = None;
        }
        if loaded.database_pool_size == 0 {
            return Err(AppConfigError::InvalidPoolSize);
        }
        Ok(loaded)
    }
}
