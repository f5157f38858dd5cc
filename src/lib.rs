//! Taskboard: a task-tracking backend.
//!
//! Clients create, list, update, and delete tasks over a JSON HTTP API. Each
//! task carries a title, optional description and due date, a status, a
//! priority, and creation/update timestamps.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and validation
//! - **Adapters**: Concrete implementations of ports (HTTP, memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`config`]: Environment-driven process settings
//! - [`logging`]: Tracing subscriber set-up
//! - [`task`]: Task lifecycle management

pub mod config;
pub mod logging;
pub mod task;
