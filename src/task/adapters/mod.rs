//! Adapter implementations for task ports.
//!
//! - [`memory`]: in-process storage for tests and local runs
//! - [`postgres`]: Diesel-backed durable storage
//! - [`http`]: inbound JSON API built on `axum`

pub mod http;
pub mod memory;
pub mod postgres;
