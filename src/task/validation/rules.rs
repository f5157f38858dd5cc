//! Individual field rules.
//!
//! Each rule is a pure function over one field. Rules return the validated
//! domain value or the [`FieldViolation`] describing why it was rejected.

use crate::task::{
    domain::{TaskDescription, TaskPriority, TaskStatus, TaskTitle},
    error::{FieldViolation, TaskField},
};
use chrono::NaiveDate;

/// Message reported for a missing, blank, or overlong title.
pub const TITLE_LENGTH_MESSAGE: &str = "Title must be between 1 and 255 characters";
/// Message reported for an overlong description.
pub const DESCRIPTION_LENGTH_MESSAGE: &str = "Description should be less than 1000 characters";
/// Message reported for a due date before today.
pub const DUE_DATE_FUTURE_MESSAGE: &str = "Due date must be in the future";
/// Message reported for a missing or unrecognized priority.
pub const PRIORITY_REQUIRED_MESSAGE: &str = "Task priority must be provided";
/// Message reported for a missing or unrecognized status.
pub const STATUS_REQUIRED_MESSAGE: &str = "Task status must be provided";

/// Validates that the title is present, non-blank, and within bounds.
///
/// # Errors
///
/// Returns a [`TaskField::Title`] violation otherwise.
pub fn validate_title(title: Option<String>) -> Result<TaskTitle, FieldViolation> {
    title
        .and_then(|value| TaskTitle::new(value).ok())
        .ok_or_else(|| FieldViolation::new(TaskField::Title, TITLE_LENGTH_MESSAGE))
}

/// Validates the optional description length.
///
/// # Errors
///
/// Returns a [`TaskField::Description`] violation when the description is
/// too long.
pub fn validate_description(
    description: Option<String>,
) -> Result<Option<TaskDescription>, FieldViolation> {
    description
        .map(TaskDescription::new)
        .transpose()
        .map_err(|_| FieldViolation::new(TaskField::Description, DESCRIPTION_LENGTH_MESSAGE))
}

/// Validates that an optional due date is `today` or later.
///
/// # Errors
///
/// Returns a [`TaskField::DueDate`] violation for dates strictly before
/// `today`.
pub fn validate_due_date(
    due_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<Option<NaiveDate>, FieldViolation> {
    match due_date {
        Some(date) if date < today => Err(FieldViolation::new(
            TaskField::DueDate,
            DUE_DATE_FUTURE_MESSAGE,
        )),
        other => Ok(other),
    }
}

/// Validates that the priority is present and recognized.
///
/// # Errors
///
/// Returns a [`TaskField::Priority`] violation otherwise.
pub fn validate_priority(priority: Option<&str>) -> Result<TaskPriority, FieldViolation> {
    priority
        .and_then(|value| TaskPriority::try_from(value).ok())
        .ok_or_else(|| FieldViolation::new(TaskField::Priority, PRIORITY_REQUIRED_MESSAGE))
}

/// Validates that the status is present and recognized.
///
/// # Errors
///
/// Returns a [`TaskField::Status`] violation otherwise.
pub fn validate_status(status: Option<&str>) -> Result<TaskStatus, FieldViolation> {
    status
        .and_then(|value| TaskStatus::try_from(value).ok())
        .ok_or_else(|| FieldViolation::new(TaskField::Status, STATUS_REQUIRED_MESSAGE))
}
