//! End-to-end tests of the task lifecycle engine through its public API.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskledger::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{HistoryEntry, Scope},
    services::{TaskLifecycleError, TaskLifecycleService},
    validation::{ListTasksQuery, TaskPayload},
};

type Service = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> Service {
    TaskLifecycleService::new(Arc::new(InMemoryTaskRepository::new()), Arc::new(DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_keeps_audit_trail_consistent(service: Service) -> eyre::Result<()> {
    let created = service
        .create(
            &TaskPayload::new("Prepare launch", "Pending", "2999-06-01")
                .with_description("Coordinate the release checklist")
                .with_priority("High")
                .with_tags(vec!["launch".to_owned(), "urgent".to_owned()]),
        )
        .await?;
    let id = created.id().to_string();
    eyre::ensure!(created.history().len() == 1);

    let updated = service
        .update(
            &id,
            &TaskPayload::new("Prepare launch", "InProgress", "2999-06-01")
                .with_description("Coordinate the release checklist")
                .with_priority("High")
                .with_tags(vec!["launch".to_owned(), "urgent".to_owned()]),
        )
        .await?;
    eyre::ensure!(updated.history().len() == 2);

    service.delete(&id).await?;
    let restored = service.restore(&id).await?;
    eyre::ensure!(restored.deleted_at().is_none());

    let changes: Vec<&str> = restored
        .history()
        .entries()
        .iter()
        .map(HistoryEntry::change)
        .collect();
    eyre::ensure!(
        changes
            == [
                "Task has been created",
                "Status changed from 'Pending' to 'InProgress'.",
                "Task has been deleted",
                "Task has been restored",
            ]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn scopes_partition_the_collection(service: Service) -> eyre::Result<()> {
    let keep = service
        .create(&TaskPayload::new("Keep me", "Pending", "2999-01-01"))
        .await?;
    let remove = service
        .create(&TaskPayload::new("Remove me", "Pending", "2999-02-01"))
        .await?;
    service.delete(&remove.id().to_string()).await?;

    let active = service.list(&ListTasksQuery::new(), Scope::Active).await?;
    let deleted = service.list(&ListTasksQuery::new(), Scope::Deleted).await?;

    eyre::ensure!(active.len() == 1 && active.first().map(|t| t.id()) == Some(keep.id()));
    eyre::ensure!(deleted.len() == 1 && deleted.first().map(|t| t.id()) == Some(remove.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filters_narrow_active_listings(service: Service) -> eyre::Result<()> {
    service
        .create(
            &TaskPayload::new("High priority review", "InProgress", "2999-02-01")
                .with_priority("High")
                .with_tags(vec!["urgent".to_owned(), "review".to_owned()]),
        )
        .await?;
    service
        .create(&TaskPayload::new("Background chore", "Pending", "2999-03-01"))
        .await?;

    let query = ListTasksQuery::new()
        .with_status("InProgress")
        .with_priority("High")
        .with_tags(vec!["urgent".to_owned(), "review".to_owned()])
        .with_date_range("2999-01-15", "2999-02-15");
    let listed = service.list(&query, Scope::Active).await?;

    eyre::ensure!(listed.len() == 1);
    eyre::ensure!(
        listed.first().map(|t| t.title().as_str()) == Some("High priority review")
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn errors_surface_contract_messages(service: Service) {
    let missing = service.create(&TaskPayload::default()).await;
    let message = missing.expect_err("empty payload rejected").to_string();
    assert_eq!(message, "Title or Status or DueDate are empty");

    let not_found = service
        .get("4f9d4b7e-0c1a-4f2e-9b3d-2a6f8e5d7c10")
        .await
        .expect_err("unknown task rejected");
    assert_eq!(not_found.to_string(), "Task not found");
    assert!(matches!(not_found, TaskLifecycleError::NotFound));
}
