//! Validation error types for inbound task payloads.
//!
//! A failed validation carries every field violation found, in field order.
//! Callers report the first one.

use std::fmt;
use thiserror::Error;

/// Payload field a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// `title`
    Title,
    /// `description`
    Description,
    /// `dueDate`
    DueDate,
    /// `status`
    Status,
    /// `priority`
    Priority,
}

impl TaskField {
    /// Returns the field name as spelled on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::DueDate => "dueDate",
            Self::Status => "status",
            Self::Priority => "priority",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    field: TaskField,
    message: String,
}

impl FieldViolation {
    /// Creates a violation for `field`.
    #[must_use]
    pub fn new(field: TaskField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Returns the offending field.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        self.field
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Non-empty list of violations produced by a failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{first}")]
pub struct ValidationErrors {
    first: FieldViolation,
    rest: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// Builds the error list, or `None` when there are no violations.
    #[must_use]
    pub fn from_violations(violations: Vec<FieldViolation>) -> Option<Self> {
        let mut iter = violations.into_iter();
        let first = iter.next()?;
        Some(Self {
            first,
            rest: iter.collect(),
        })
    }

    /// Returns the first violation found.
    #[must_use]
    pub const fn first(&self) -> &FieldViolation {
        &self.first
    }

    /// Returns the message of the first violation.
    #[must_use]
    pub fn message(&self) -> &str {
        self.first.message()
    }

    /// Iterates over every violation in field order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// Returns the number of violations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Returns `false`: a `ValidationErrors` holds at least one violation.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` when any violation refers to `field`.
    #[must_use]
    pub fn contains(&self, field: TaskField) -> bool {
        self.iter().any(|violation| violation.field() == field)
    }
}

impl From<FieldViolation> for ValidationErrors {
    fn from(violation: FieldViolation) -> Self {
        Self {
            first: violation,
            rest: Vec::new(),
        }
    }
}
