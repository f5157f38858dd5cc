//! Translation between wire shapes and domain types.

use crate::task::{
    domain::Task,
    dto::{CreateTaskPayload, TaskView, UpdateTaskPayload},
    services::{CreateTaskRequest, UpdateTaskRequest},
};

/// Structural mapping between validated payloads, service requests, and
/// task views. Implementations are pure and never fail.
pub trait TaskMapper: Send + Sync {
    /// Builds a creation request from a validated payload.
    fn from_create_payload(&self, payload: CreateTaskPayload) -> CreateTaskRequest;

    /// Builds an update request from a validated payload.
    fn from_update_payload(&self, payload: UpdateTaskPayload) -> UpdateTaskRequest;

    /// Builds the outward-facing view of a task.
    fn to_view(&self, task: &Task) -> TaskView;
}

/// Field-for-field mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTaskMapper;

impl TaskMapper for DefaultTaskMapper {
    fn from_create_payload(&self, payload: CreateTaskPayload) -> CreateTaskRequest {
        let CreateTaskPayload {
            title,
            description,
            due_date,
            priority,
        } = payload;
        CreateTaskRequest::new(title, priority)
            .with_description(description)
            .with_due_date(due_date)
    }

    fn from_update_payload(&self, payload: UpdateTaskPayload) -> UpdateTaskRequest {
        let UpdateTaskPayload {
            title,
            description,
            due_date,
            status,
            priority,
        } = payload;
        UpdateTaskRequest::new(title, status, priority)
            .with_description(description)
            .with_due_date(due_date)
    }

    fn to_view(&self, task: &Task) -> TaskView {
        TaskView {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(|d| d.as_str().to_owned()),
            due_date: task.due_date(),
            priority: task.priority(),
            status: task.status(),
        }
    }
}
