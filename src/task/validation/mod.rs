//! Task payload validation.
//!
//! This module provides the field rules and the default implementation of
//! the [`TaskValidator`](crate::task::ports::TaskValidator) port.

pub mod rules;
pub mod service;

pub use service::DefaultTaskValidator;
