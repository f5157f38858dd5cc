//! Route table for the task API.

use super::handlers::{TaskApiState, create_task, delete_task, list_tasks, update_task};
use crate::task::{
    mapper::TaskMapper,
    ports::{TaskRepository, TaskValidator},
};
use axum::{
    Router,
    routing::{get, put},
};
use mockable::Clock;
use tower_http::trace::TraceLayer;

/// Collection path for task resources.
pub const TASKS_PATH: &str = "/api/v1/tasks";

/// Item path for a single task resource.
pub const TASK_PATH: &str = "/api/v1/tasks/{task_id}";

/// Builds the task API router with request tracing.
pub fn task_router<R, C, V, M>(state: TaskApiState<R, C, V, M>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
    V: TaskValidator + 'static,
    M: TaskMapper + 'static,
{
    Router::new()
        .route(
            TASKS_PATH,
            get(list_tasks::<R, C, V, M>).post(create_task::<R, C, V, M>),
        )
        .route(
            TASK_PATH,
            put(update_task::<R, C, V, M>).delete(delete_task::<R, C, V, M>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
