//! Service layer for task creation, listing, update, and deletion.

use crate::task::{
    domain::{
        NewTask, Task, TaskChanges, TaskDescription, TaskId, TaskPriority, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: TaskTitle,
    description: Option<TaskDescription>,
    due_date: Option<NaiveDate>,
    priority: TaskPriority,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub const fn new(title: TaskTitle, priority: TaskPriority) -> Self {
        Self {
            title,
            description: None,
            due_date: None,
            priority,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<TaskDescription>) -> Self {
        self.description = description;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }
}

/// Request for replacing every mutable field of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: TaskTitle,
    description: Option<TaskDescription>,
    due_date: Option<NaiveDate>,
    status: TaskStatus,
    priority: TaskPriority,
}

impl UpdateTaskRequest {
    /// Creates a request with the required fields. Description and due date
    /// default to cleared.
    #[must_use]
    pub const fn new(title: TaskTitle, status: TaskStatus, priority: TaskPriority) -> Self {
        Self {
            title,
            description: None,
            due_date: None,
            status,
            priority,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<TaskDescription>) -> Self {
        self.description = description;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }
}

impl From<UpdateTaskRequest> for TaskChanges {
    fn from(request: UpdateTaskRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            due_date: request.due_date,
            status: request.status,
            priority: request.priority,
        }
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task exists with the requested identifier.
    #[error("Task with ID '{0}' not found.")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Input is expected to be validated upstream; the service applies business
/// rules (initial status, timestamps, not-found signalling) and delegates
/// storage to the repository.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates an `OPEN` task and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            due_date,
            priority,
        } = request;
        let new_task = NewTask::open(title, priority, &*self.clock)
            .with_description(description)
            .with_due_date(due_date);

        let task = self.repository.store(new_task).await?;
        info!(task_id = %task.id(), priority = %task.priority(), "task created");
        Ok(task)
    }

    /// Lists every task in ascending creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.find_all_ordered_by_created_at().await?;
        debug!(count = tasks.len(), "tasks listed");
        Ok(tasks)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn find_task(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        let task = self.repository.find_by_id(id).await?;
        debug!(task_id = %id, found = task.is_some(), "task lookup");
        Ok(task)
    }

    /// Replaces every mutable field of an existing task.
    ///
    /// The identifier and creation timestamp are preserved and `updated_at`
    /// moves strictly forward.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the identifier,
    /// in which case nothing is written, or [`TaskServiceError::Repository`]
    /// when persistence fails.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;

        task.apply_changes(request.into(), &*self.clock);

        self.repository
            .update(&task)
            .await
            .map_err(|err| match err {
                TaskRepositoryError::NotFound(missing) => TaskServiceError::NotFound(missing),
                other => TaskServiceError::Repository(other),
            })?;
        info!(task_id = %id, status = %task.status(), "task updated");
        Ok(task)
    }

    /// Deletes a task. Deleting an unknown identifier succeeds silently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository.delete_by_id(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }
}
