//! Shared world state for task management BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    dto::CreateTaskBody,
    error::ValidationErrors,
    mapper::{DefaultTaskMapper, TaskMapper},
    ports::TaskValidator,
    services::{TaskService, TaskServiceError},
    validation::DefaultTaskValidator,
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task management behaviour tests.
pub struct TaskBoardWorld {
    pub service: TestTaskService,
    pub validator: DefaultTaskValidator<DefaultClock>,
    pub mapper: DefaultTaskMapper,
    pub current_task: Option<Task>,
    pub last_rejection: Option<ValidationErrors>,
    pub last_update_result: Option<Result<Task, TaskServiceError>>,
}

impl TaskBoardWorld {
    /// Creates a world over an empty board.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&clock),
        );
        Self {
            service,
            validator: DefaultTaskValidator::new(clock),
            mapper: DefaultTaskMapper,
            current_task: None,
            last_rejection: None,
            last_update_result: None,
        }
    }

    /// Validates, maps, and creates a task from a raw body, recording either
    /// the created task or the validation failure.
    ///
    /// # Errors
    ///
    /// Returns an error when the service fails after validation passed.
    pub fn submit(&mut self, body: CreateTaskBody) -> Result<(), eyre::Report> {
        match self.validator.validate_create(body) {
            Ok(payload) => {
                let request = self.mapper.from_create_payload(payload);
                let task = run_async(self.service.create_task(request))?;
                self.current_task = Some(task);
                self.last_rejection = None;
            }
            Err(errors) => self.last_rejection = Some(errors),
        }
        Ok(())
    }

    /// Returns the task created earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn current_task(&self) -> Result<&Task, eyre::Report> {
        self.current_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
