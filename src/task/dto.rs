//! Wire-level request and response shapes.
//!
//! Request bodies are deliberately loose: every field is optional and enum
//! fields arrive as text, so that missing or unrecognized values reach the
//! validation layer instead of failing JSON extraction. The validated
//! payload types carry domain values and can only be produced by a
//! [`TaskValidator`](crate::task::ports::TaskValidator).

use crate::task::domain::{TaskDescription, TaskId, TaskPriority, TaskStatus, TaskTitle};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// JSON body accepted when creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Requested title.
    pub title: Option<String>,
    /// Requested description.
    pub description: Option<String>,
    /// Requested due date (`YYYY-MM-DD`).
    pub due_date: Option<NaiveDate>,
    /// Requested priority name.
    pub priority: Option<String>,
}

/// JSON body accepted when updating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskBody {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description; absent clears it.
    pub description: Option<String>,
    /// Replacement due date; absent clears it.
    pub due_date: Option<NaiveDate>,
    /// Replacement status name.
    pub status: Option<String>,
    /// Replacement priority name.
    pub priority: Option<String>,
}

/// Creation payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskPayload {
    pub(crate) title: TaskTitle,
    pub(crate) description: Option<TaskDescription>,
    pub(crate) due_date: Option<NaiveDate>,
    pub(crate) priority: TaskPriority,
}

impl CreateTaskPayload {
    /// Returns the validated title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the validated description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the validated due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the validated priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }
}

/// Update payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskPayload {
    pub(crate) title: TaskTitle,
    pub(crate) description: Option<TaskDescription>,
    pub(crate) due_date: Option<NaiveDate>,
    pub(crate) status: TaskStatus,
    pub(crate) priority: TaskPriority,
}

impl UpdateTaskPayload {
    /// Returns the validated title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the validated description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the validated due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the validated status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the validated priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }
}

/// Outward-facing representation of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Title.
    pub title: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Priority.
    pub priority: TaskPriority,
    /// Lifecycle status.
    pub status: TaskStatus,
}

/// JSON error body returned by the HTTP adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}
