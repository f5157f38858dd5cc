//! Task lifecycle management.
//!
//! Requests enter through the HTTP adapter, are validated into typed payloads,
//! mapped into service requests, and applied by [`services::TaskService`]
//! against a [`ports::TaskRepository`]. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Wire shapes in [`dto`], checked by [`validation`] and translated by
//!   [`mapper`]

pub mod adapters;
pub mod domain;
pub mod dto;
pub mod error;
pub mod mapper;
pub mod ports;
pub mod services;
pub mod validation;
