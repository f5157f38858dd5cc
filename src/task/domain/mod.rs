//! Domain model for task records.
//!
//! The domain owns the task aggregate, its validated scalar values, and the
//! rules for creation and mutation. Persistence and transport concerns stay
//! outside this boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskDescription, TaskId, TaskTitle};
pub use task::{NewTask, PersistedTaskData, Task, TaskChanges, TaskPriority, TaskStatus};
