//! Validator port for inbound task payloads.

use crate::task::{
    dto::{CreateTaskBody, CreateTaskPayload, UpdateTaskBody, UpdateTaskPayload},
    error::ValidationErrors,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Port for checking request bodies before any domain object is built.
///
/// Implementations must be pure apart from reading the current date: they
/// never touch storage. Every field is checked; the returned error lists all
/// violations in field order.
pub trait TaskValidator: Send + Sync {
    /// Validates a creation body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] when any field violates its constraint.
    fn validate_create(&self, body: CreateTaskBody) -> ValidationResult<CreateTaskPayload>;

    /// Validates an update body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] when any field violates its constraint.
    fn validate_update(&self, body: UpdateTaskBody) -> ValidationResult<UpdateTaskPayload>;
}
