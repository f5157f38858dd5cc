//! Serves the task API over HTTP.
//!
//! Settings come from `TASKBOARD_*` environment variables (see
//! [`taskboard::config`]). When `TASKBOARD_DATABASE_URL` is set, tasks are
//! stored in `PostgreSQL`; otherwise they live in memory for the lifetime of
//! the process.

use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::{
    config::{AppConfig, AppConfigError},
    logging::{LoggingError, init_logging},
    task::{
        adapters::{
            http::{TaskApiState, task_router},
            memory::InMemoryTaskRepository,
            postgres::{PostgresTaskRepository, build_task_pool},
        },
        mapper::DefaultTaskMapper,
        ports::TaskRepository,
        services::TaskService,
        validation::DefaultTaskValidator,
    },
};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] AppConfigError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error("failed to build database pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = AppConfig::load()?;
    init_logging(&config.log_filter)?;

    match config.database_url.as_deref() {
        Some(url) => {
            let pool = build_task_pool(url, config.database_pool_size)?;
            info!(pool_size = config.database_pool_size, "using PostgreSQL task storage");
            serve(&config, PostgresTaskRepository::new(pool)).await
        }
        None => {
            warn!("TASKBOARD_DATABASE_URL is unset; tasks will not survive a restart");
            serve(&config, InMemoryTaskRepository::new()).await
        }
    }
}

async fn serve<R>(config: &AppConfig, repository: R) -> Result<(), ServerError>
where
    R: TaskRepository + 'static,
{
    let clock = Arc::new(DefaultClock);
    let service = TaskService::new(Arc::new(repository), Arc::clone(&clock));
    let state = TaskApiState::new(
        Arc::new(service),
        Arc::new(DefaultTaskValidator::new(clock)),
        Arc::new(DefaultTaskMapper),
    );

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .map_err(|source| ServerError::Bind {
            address: config.bind_address.clone(),
            source,
        })?;
    info!(address = %config.bind_address, "task server listening");

    axum::serve(listener, task_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;
    info!("task server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
