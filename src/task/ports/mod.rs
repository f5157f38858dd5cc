//! Port contracts for task record management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services and
//! the inbound HTTP adapter.

pub mod repository;
pub mod validator;

#[cfg(test)]
pub use repository::MockTaskRepository;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use validator::{TaskValidator, ValidationResult};
