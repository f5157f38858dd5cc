//! Shared test helpers for in-memory integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, TaskPriority, TaskTitle},
};

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Returns a UTC instant on 2026-03-15 at the given hour.
///
/// # Errors
///
/// Returns an error when the hour is out of range.
pub fn at_hour(hour: u32) -> Result<DateTime<Utc>, eyre::Report> {
    Utc.with_ymd_and_hms(2026, 3, 15, hour, 0, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid hour {hour}"))
}

/// Builds an open task stamped at `instant`.
///
/// # Errors
///
/// Returns an error when the title is invalid.
pub fn new_task_at(title: &str, instant: DateTime<Utc>) -> Result<NewTask, eyre::Report> {
    Ok(NewTask::open(
        TaskTitle::new(title)?,
        TaskPriority::Medium,
        &FixedClock(instant),
    ))
}
