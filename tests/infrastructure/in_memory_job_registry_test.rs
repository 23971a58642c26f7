use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use dubline::application::ports::{JobRegistry, RegistryError};
use dubline::domain::{JobId, JobStatus, JobTransitionError, JobUpdate, OutputMode};
use dubline::infrastructure::persistence::InMemoryJobRegistry;

#[tokio::test]
async fn given_created_job_when_fetching_then_returns_queued_snapshot() {
    let registry = InMemoryJobRegistry::new();

    let job = registry.create(OutputMode::Transcript).await.unwrap();
    let fetched = registry.get(job.id).await.unwrap();

    assert_eq!(fetched, job);
    assert_eq!(fetched.status, JobStatus::Queued);
    assert_eq!(registry.len().await, 1);
}

#[tokio::test]
async fn given_unknown_id_when_fetching_then_returns_not_found() {
    let registry = InMemoryJobRegistry::new();
    let id = JobId::new();

    let result = registry.get(id).await;

    assert!(matches!(result, Err(RegistryError::NotFound(missing)) if missing == id));
}

#[tokio::test]
async fn given_live_job_when_creating_same_id_then_returns_conflict() {
    let registry = InMemoryJobRegistry::new();
    let id = JobId::new();
    registry.create_with_id(id, OutputMode::Audio).await.unwrap();

    let result = registry.create_with_id(id, OutputMode::Video).await;

    assert!(matches!(result, Err(RegistryError::Conflict(_))));
}

#[tokio::test]
async fn given_update_when_merging_then_returns_new_snapshot_and_notifies_watchers() {
    let registry = InMemoryJobRegistry::new();
    let job = registry.create(OutputMode::Audio).await.unwrap();
    let mut receiver = registry.watch(job.id).await;
    receiver.borrow_and_update();

    let updated = registry
        .update(
            job.id,
            JobUpdate::status(JobStatus::Fetching)
                .with_percent(10)
                .with_message("Downloading media"),
        )
        .await
        .unwrap();

    assert_eq!(updated.status, JobStatus::Fetching);
    assert_eq!(updated.message, "Downloading media");
    assert!(receiver.has_changed().unwrap());
    assert_eq!(receiver.borrow().as_ref(), Some(&updated));
}

#[tokio::test]
async fn given_invalid_update_when_merging_then_keeps_previous_snapshot() {
    let registry = InMemoryJobRegistry::new();
    let job = registry.create(OutputMode::Audio).await.unwrap();
    registry
        .update(job.id, JobUpdate::status(JobStatus::Transcribing).with_percent(45))
        .await
        .unwrap();

    let result = registry
        .update(job.id, JobUpdate::status(JobStatus::Fetching).with_percent(10))
        .await;

    assert!(matches!(
        result,
        Err(RegistryError::InvalidTransition {
            source: JobTransitionError::StatusRegression { .. },
            ..
        })
    ));
    let stored = registry.get(job.id).await.unwrap();
    assert_eq!(stored.status, JobStatus::Transcribing);
    assert_eq!(stored.percent, 45);
}

#[tokio::test]
async fn given_pending_watch_when_job_created_then_watcher_receives_it() {
    let registry = InMemoryJobRegistry::new();
    let id = JobId::new();
    let mut receiver = registry.watch(id).await;
    assert!(receiver.borrow().is_none());
    assert_eq!(registry.len().await, 0);

    registry.create_with_id(id, OutputMode::Video).await.unwrap();

    receiver.changed().await.unwrap();
    assert_eq!(
        receiver.borrow().as_ref().map(|job| job.status),
        Some(JobStatus::Queued)
    );
}

#[tokio::test]
async fn given_evicted_job_when_fetching_then_not_found_and_watchers_close() {
    let registry = InMemoryJobRegistry::new();
    let job = registry.create(OutputMode::Audio).await.unwrap();
    let mut receiver = registry.watch(job.id).await;

    registry.evict(job.id).await.unwrap();

    assert!(registry.get(job.id).await.is_err());
    assert!(receiver.changed().await.is_err());
    assert!(matches!(
        registry.evict(job.id).await,
        Err(RegistryError::NotFound(_))
    ));
}

#[tokio::test]
async fn given_mixed_jobs_when_evicting_expired_then_only_stale_entries_go() {
    let registry = InMemoryJobRegistry::new();
    let finished = registry.create(OutputMode::Audio).await.unwrap();
    let running = registry.create(OutputMode::Audio).await.unwrap();
    registry
        .update(finished.id, JobUpdate::status(JobStatus::Completed))
        .await
        .unwrap();
    let pending = JobId::new();
    let _receiver = registry.watch(pending).await;

    let later = Utc::now() + chrono::Duration::seconds(120);
    let evicted = registry
        .evict_expired(later, Duration::from_secs(60), Duration::from_secs(60))
        .await;

    assert_eq!(evicted, 2);
    assert!(registry.get(finished.id).await.is_err());
    assert!(registry.get(running.id).await.is_ok());
}

#[tokio::test]
async fn given_abandoned_pending_watch_when_evicting_then_slot_goes_before_ttl() {
    let registry = InMemoryJobRegistry::new();
    let abandoned = JobId::new();
    let watched = JobId::new();
    drop(registry.watch(abandoned).await);
    let receiver = registry.watch(watched).await;

    let evicted = registry
        .evict_expired(Utc::now(), Duration::from_secs(60), Duration::from_secs(3600))
        .await;

    assert_eq!(evicted, 1);
    registry
        .create_with_id(watched, OutputMode::Audio)
        .await
        .unwrap();
    assert_eq!(receiver.borrow().as_ref().map(|job| job.id), Some(watched));
}

#[tokio::test]
async fn given_concurrent_writers_on_distinct_jobs_when_updating_then_all_succeed() {
    let registry = Arc::new(InMemoryJobRegistry::new());
    let mut handles = Vec::new();

    for _ in 0..16 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            let job = registry.create(OutputMode::Transcript).await.unwrap();
            registry
                .update(job.id, JobUpdate::status(JobStatus::Fetching).with_percent(10))
                .await
                .unwrap();
            registry
                .update(job.id, JobUpdate::status(JobStatus::Completed))
                .await
                .unwrap()
        }));
    }

    for handle in handles {
        let job = handle.await.unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.percent, 100);
    }
    assert_eq!(registry.len().await, 16);
}
