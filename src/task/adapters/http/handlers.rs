//! HTTP handlers for the task API.
//!
//! Each handler runs the same pipeline: extract, validate, map to a service
//! request, call the service, map the result to a [`TaskView`].

use super::error::ApiError;
use crate::task::{
    domain::TaskId,
    dto::{CreateTaskBody, TaskView, UpdateTaskBody},
    mapper::TaskMapper,
    ports::{TaskRepository, TaskValidator},
    services::TaskService,
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use mockable::Clock;
use std::sync::Arc;
use uuid::Uuid;

/// Shared handler dependencies.
pub struct TaskApiState<R, C, V, M>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service: Arc<TaskService<R, C>>,
    validator: Arc<V>,
    mapper: Arc<M>,
}

impl<R, C, V, M> TaskApiState<R, C, V, M>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    V: TaskValidator,
    M: TaskMapper,
{
    /// Bundles the service, validator, and mapper used by the handlers.
    #[must_use]
    pub const fn new(service: Arc<TaskService<R, C>>, validator: Arc<V>, mapper: Arc<M>) -> Self {
        Self {
            service,
            validator,
            mapper,
        }
    }
}

impl<R, C, V, M> Clone for TaskApiState<R, C, V, M>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            validator: Arc::clone(&self.validator),
            mapper: Arc::clone(&self.mapper),
        }
    }
}

/// `POST /api/v1/tasks`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed or invalid bodies and storage failures.
pub async fn create_task<R, C, V, M>(
    State(state): State<TaskApiState<R, C, V, M>>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskView>), ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    V: TaskValidator,
    M: TaskMapper,
{
    let Json(body) = body?;
    let payload = state.validator.validate_create(body)?;
    let request = state.mapper.from_create_payload(payload);
    let task = state.service.create_task(request).await?;
    Ok((StatusCode::CREATED, Json(state.mapper.to_view(&task))))
}

/// `GET /api/v1/tasks`
///
/// # Errors
///
/// Returns [`ApiError`] when storage fails.
pub async fn list_tasks<R, C, V, M>(
    State(state): State<TaskApiState<R, C, V, M>>,
) -> Result<Json<Vec<TaskView>>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    V: TaskValidator,
    M: TaskMapper,
{
    let tasks = state.service.list_tasks().await?;
    let views = tasks.iter().map(|task| state.mapper.to_view(task)).collect();
    Ok(Json(views))
}

/// `PUT /api/v1/tasks/{task_id}`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed or invalid input, unknown ids, and
/// storage failures.
pub async fn update_task<R, C, V, M>(
    State(state): State<TaskApiState<R, C, V, M>>,
    task_id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> Result<Json<TaskView>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    V: TaskValidator,
    M: TaskMapper,
{
    let Path(task_id) = task_id?;
    let Json(body) = body?;
    let payload = state.validator.validate_update(body)?;
    let request = state.mapper.from_update_payload(payload);
    let task = state
        .service
        .update_task(TaskId::from_uuid(task_id), request)
        .await?;
    Ok(Json(state.mapper.to_view(&task)))
}

/// `DELETE /api/v1/tasks/{task_id}`
///
/// Responds `204 No Content` whether or not the task existed.
///
/// # Errors
///
/// Returns [`ApiError`] for a malformed id or a storage failure.
pub async fn delete_task<R, C, V, M>(
    State(state): State<TaskApiState<R, C, V, M>>,
    task_id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    V: TaskValidator,
    M: TaskMapper,
{
    let Path(task_id) = task_id?;
    state.service.delete_task(TaskId::from_uuid(task_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
