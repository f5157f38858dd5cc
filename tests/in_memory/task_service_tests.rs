//! Task scenarios exercised through the service and in-memory repository.

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDescription, TaskId, TaskPriority, TaskStatus, TaskTitle},
    services::{CreateTaskRequest, TaskService, TaskServiceError, UpdateTaskRequest},
};

type TestService = TaskService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_create_update_delete(service: TestService) -> Result<(), eyre::Report> {
    let created = service
        .create_task(
            CreateTaskRequest::new(TaskTitle::new("Buy milk")?, TaskPriority::Low)
                .with_description(Some(TaskDescription::new("Two litres")?)),
        )
        .await?;
    eyre::ensure!(created.status() == TaskStatus::Open, "new tasks start open");

    let updated = service
        .update_task(
            created.id(),
            UpdateTaskRequest::new(TaskTitle::new("Buy milk")?, TaskStatus::Done, TaskPriority::Low)
                .with_description(Some(TaskDescription::new("Two litres")?)),
        )
        .await?;
    eyre::ensure!(updated.status() == TaskStatus::Done, "status should be done");
    eyre::ensure!(
        updated.updated_at() > created.updated_at(),
        "updated_at should move forward"
    );
    eyre::ensure!(
        updated.created_at() == created.created_at(),
        "created_at must not change"
    );

    service.delete_task(created.id()).await?;
    eyre::ensure!(
        service.find_task(created.id()).await?.is_none(),
        "deleted task should be gone"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn consecutive_updates_keep_advancing(service: TestService) -> Result<(), eyre::Report> {
    let created = service
        .create_task(CreateTaskRequest::new(
            TaskTitle::new("Iterate")?,
            TaskPriority::Medium,
        ))
        .await?;

    let mut previous = created.updated_at();
    for status in [TaskStatus::InProgress, TaskStatus::Done, TaskStatus::Open] {
        let updated = service
            .update_task(
                created.id(),
                UpdateTaskRequest::new(TaskTitle::new("Iterate")?, status, TaskPriority::Medium),
            )
            .await?;
        eyre::ensure!(updated.updated_at() > previous, "updated_at must increase");
        previous = updated.updated_at();
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_deleted_task_is_not_found(service: TestService) -> Result<(), eyre::Report> {
    let created = service
        .create_task(CreateTaskRequest::new(
            TaskTitle::new("Short lived")?,
            TaskPriority::High,
        ))
        .await?;
    service.delete_task(created.id()).await?;

    let result = service
        .update_task(
            created.id(),
            UpdateTaskRequest::new(
                TaskTitle::new("Resurrected")?,
                TaskStatus::Open,
                TaskPriority::High,
            ),
        )
        .await;

    assert!(matches!(result, Err(TaskServiceError::NotFound(id)) if id == created.id()));
    assert!(service.list_tasks().await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_unknown_task_succeeds(service: TestService) -> Result<(), eyre::Report> {
    service.delete_task(TaskId::new()).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_task_has_no_due_date_by_default(service: TestService) -> Result<(), eyre::Report> {
    let created = service
        .create_task(CreateTaskRequest::new(
            TaskTitle::new("Buy milk")?,
            TaskPriority::Low,
        ))
        .await?;

    assert_eq!(created.status(), TaskStatus::Open);
    assert_eq!(created.due_date(), None);
    assert_eq!(created.description(), None);
    assert_eq!(created.created_at(), created.updated_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_nil_identifier_reports_that_identifier(
    service: TestService,
) -> Result<(), eyre::Report> {
    let nil = TaskId::from_uuid(uuid::Uuid::nil());

    let result = service
        .update_task(
            nil,
            UpdateTaskRequest::new(TaskTitle::new("Nobody")?, TaskStatus::Done, TaskPriority::Low),
        )
        .await;

    let Err(err) = result else {
        return Err(eyre::eyre!("update of an unknown task should fail"));
    };
    assert_eq!(
        err.to_string(),
        "Task with ID '00000000-0000-0000-0000-000000000000' not found."
    );
    Ok(())
}
