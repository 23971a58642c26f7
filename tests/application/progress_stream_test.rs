use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;

use dubline::application::ports::JobRegistry;
use dubline::application::services::ProgressStream;
use dubline::domain::{Job, JobId, JobStatus, JobUpdate, OutputMode};
use dubline::infrastructure::persistence::InMemoryJobRegistry;

fn setup() -> (Arc<dyn JobRegistry>, ProgressStream) {
    let registry: Arc<dyn JobRegistry> = Arc::new(InMemoryJobRegistry::new());
    let progress = ProgressStream::new(Arc::clone(&registry));
    (registry, progress)
}

async fn collect(progress: &ProgressStream, job_id: JobId) -> tokio::task::JoinHandle<Vec<Job>> {
    let stream = progress.subscribe(job_id).await;
    tokio::spawn(stream.collect::<Vec<Job>>())
}

async fn drive_to_completion(registry: &Arc<dyn JobRegistry>, job_id: JobId) {
    registry
        .update(job_id, JobUpdate::status(JobStatus::Fetching).with_percent(10))
        .await
        .unwrap();
    registry
        .update(job_id, JobUpdate::status(JobStatus::Completed))
        .await
        .unwrap();
}

#[tokio::test]
async fn given_subscription_before_creation_when_job_runs_then_stream_waits_for_it() {
    let (registry, progress) = setup();
    let job_id = JobId::new();

    let handle = collect(&progress, job_id).await;
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!handle.is_finished());

    registry
        .create_with_id(job_id, OutputMode::TranscriptOnly)
        .await
        .unwrap();
    drive_to_completion(&registry, job_id).await;

    let events = tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .unwrap()
        .unwrap();
    let last = events.last().unwrap();
    assert_eq!(last.status, JobStatus::Completed);
    assert_eq!(last.percent, 100);
    assert_eq!(events.iter().filter(|job| job.is_terminal()).count(), 1);
}

#[tokio::test]
async fn given_two_subscribers_when_job_completes_then_both_see_terminal_event() {
    let (registry, progress) = setup();
    let job = registry.create(OutputMode::Audio).await.unwrap();

    let first = collect(&progress, job.id).await;
    let second = collect(&progress, job.id).await;
    drive_to_completion(&registry, job.id).await;

    for handle in [first, second] {
        let events = tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(events.last().unwrap().status, JobStatus::Completed);
    }
}

#[tokio::test]
async fn given_terminal_job_when_subscribing_then_yields_single_snapshot() {
    let (registry, progress) = setup();
    let job = registry.create(OutputMode::Video).await.unwrap();
    registry
        .update(
            job.id,
            JobUpdate::status(JobStatus::Failed).with_error("fetch failed: offline"),
        )
        .await
        .unwrap();

    let events: Vec<Job> = progress.subscribe(job.id).await.collect().await;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].status, JobStatus::Failed);
    assert_eq!(events[0].error.as_deref(), Some("fetch failed: offline"));
}

#[tokio::test]
async fn given_job_evicted_before_terminal_when_streaming_then_stream_ends() {
    let (registry, progress) = setup();
    let job = registry.create(OutputMode::Video).await.unwrap();

    let handle = collect(&progress, job.id).await;
    registry.evict(job.id).await.unwrap();

    let events = tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .unwrap()
        .unwrap();
    assert!(events.iter().all(|job| !job.is_terminal()));
}

#[tokio::test]
async fn given_subscriber_dropped_when_job_continues_then_updates_still_apply() {
    let (registry, progress) = setup();
    let job = registry.create(OutputMode::Transcript).await.unwrap();

    let stream = progress.subscribe(job.id).await;
    drop(stream);
    drive_to_completion(&registry, job.id).await;

    let stored = registry.get(job.id).await.unwrap();
    assert_eq!(stored.status, JobStatus::Completed);
}
