//! Application services for task record orchestration.

mod task_service;

pub use task_service::{
    CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult, UpdateTaskRequest,
};
