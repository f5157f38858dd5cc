//! Inbound HTTP adapter exposing task operations as a JSON API.

mod error;
mod handlers;
mod router;

pub use error::{ApiError, INTERNAL_ERROR_MESSAGE};
pub use handlers::{TaskApiState, create_task, delete_task, list_tasks, update_task};
pub use router::{TASK_PATH, TASKS_PATH, task_router};
