//! Validation service implementation.
//!
//! Provides the default implementation of the [`TaskValidator`] port by
//! running every field rule and collecting the violations in field order.

use super::rules;
use crate::task::{
    dto::{CreateTaskBody, CreateTaskPayload, UpdateTaskBody, UpdateTaskPayload},
    error::{FieldViolation, ValidationErrors},
    ports::validator::{TaskValidator, ValidationResult},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;

/// Default validator reading "today" from the local date of a clock.
pub struct DefaultTaskValidator<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
}

impl<C> DefaultTaskValidator<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a validator bound to `clock`.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }
}

impl<C> TaskValidator for DefaultTaskValidator<C>
where
    C: Clock + Send + Sync,
{
    fn validate_create(&self, body: CreateTaskBody) -> ValidationResult<CreateTaskPayload> {
        let title = rules::validate_title(body.title);
        let description = rules::validate_description(body.description);
        let due_date = rules::validate_due_date(body.due_date, self.today());
        let priority = rules::validate_priority(body.priority.as_deref());

        ensure_no_violations([
            title.as_ref().err(),
            description.as_ref().err(),
            due_date.as_ref().err(),
            priority.as_ref().err(),
        ])?;

        Ok(CreateTaskPayload {
            title: title?,
            description: description?,
            due_date: due_date?,
            priority: priority?,
        })
    }

    fn validate_update(&self, body: UpdateTaskBody) -> ValidationResult<UpdateTaskPayload> {
        let title = rules::validate_title(body.title);
        let description = rules::validate_description(body.description);
        let due_date = rules::validate_due_date(body.due_date, self.today());
        let status = rules::validate_status(body.status.as_deref());
        let priority = rules::validate_priority(body.priority.as_deref());

        ensure_no_violations([
            title.as_ref().err(),
            description.as_ref().err(),
            due_date.as_ref().err(),
            status.as_ref().err(),
            priority.as_ref().err(),
        ])?;

        Ok(UpdateTaskPayload {
            title: title?,
            description: description?,
            due_date: due_date?,
            status: status?,
            priority: priority?,
        })
    }
}

fn ensure_no_violations<const N: usize>(
    violations: [Option<&FieldViolation>; N],
) -> ValidationResult<()> {
    let collected = violations.into_iter().flatten().cloned().collect();
    ValidationErrors::from_violations(collected).map_or(Ok(()), Err)
}
