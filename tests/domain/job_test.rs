use dubline::domain::{
    ArtifactKind, ArtifactName, Job, JobResult, JobStatus, JobTransitionError, JobUpdate,
    OutputMode, Stage,
};

fn started_job() -> Job {
    let mut job = Job::new(OutputMode::Video);
    job.apply(
        JobUpdate::status(JobStatus::Transcribing).with_percent(Stage::Transcribe.percent()),
    )
    .unwrap();
    job
}

#[test]
fn given_new_job_when_created_then_is_queued_at_zero_percent() {
    let job = Job::new(OutputMode::Audio);

    assert_eq!(job.status, JobStatus::Queued);
    assert_eq!(job.percent, 0);
    assert!(job.result.is_none());
    assert!(job.error.is_none());
    assert!(job.finished_at.is_none());
}

#[test]
fn given_running_job_when_status_moves_backwards_then_rejects_and_keeps_state() {
    let mut job = started_job();
    let before = job.clone();

    let result = job.apply(JobUpdate::status(JobStatus::Fetching));

    assert!(matches!(
        result,
        Err(JobTransitionError::StatusRegression {
            from: JobStatus::Transcribing,
            to: JobStatus::Fetching
        })
    ));
    assert_eq!(job, before);
}

#[test]
fn given_running_job_when_percent_decreases_then_rejects() {
    let mut job = started_job();

    let result = job.apply(JobUpdate::default().with_percent(10));

    assert!(matches!(
        result,
        Err(JobTransitionError::PercentRegression { from: 45, to: 10 })
    ));
}

#[test]
fn given_running_job_when_percent_exceeds_hundred_then_rejects() {
    let mut job = started_job();

    let result = job.apply(JobUpdate::default().with_percent(101));

    assert!(matches!(
        result,
        Err(JobTransitionError::PercentOutOfRange(101))
    ));
}

#[test]
fn given_non_completed_status_when_percent_is_hundred_then_rejects() {
    let mut job = started_job();

    let result = job.apply(JobUpdate::status(JobStatus::Muxing).with_percent(100));

    assert_eq!(result, Err(JobTransitionError::PrematureCompletion));
}

#[test]
fn given_running_job_when_completed_then_percent_is_hundred_and_finished_at_is_set() {
    let mut job = started_job();
    let result = JobResult {
        title: Some("Clip".to_string()),
        video_file: Some(ArtifactName::generate(ArtifactKind::Video)),
        ..JobResult::default()
    };

    job.apply(JobUpdate::status(JobStatus::Completed).with_result(result.clone()))
        .unwrap();

    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.percent, 100);
    assert_eq!(job.result, Some(result));
    assert!(job.finished_at.is_some());
}

#[test]
fn given_running_job_when_failed_then_keeps_last_percent() {
    let mut job = started_job();

    job.apply(
        JobUpdate::status(JobStatus::Failed)
            .with_message("Processing failed")
            .with_error("transcribe failed: boom"),
    )
    .unwrap();

    assert_eq!(job.status, JobStatus::Failed);
    assert_eq!(job.percent, 45);
    assert_eq!(job.error.as_deref(), Some("transcribe failed: boom"));
    assert!(job.finished_at.is_some());
}

#[test]
fn given_terminal_job_when_any_update_applied_then_is_frozen() {
    let mut job = started_job();
    job.apply(JobUpdate::status(JobStatus::Failed).with_error("boom"))
        .unwrap();
    let frozen = job.clone();

    let message_only = job.apply(JobUpdate::default().with_message("late"));
    let completion = job.apply(JobUpdate::status(JobStatus::Completed));

    assert_eq!(
        message_only,
        Err(JobTransitionError::Frozen(JobStatus::Failed))
    );
    assert_eq!(completion, Err(JobTransitionError::Frozen(JobStatus::Failed)));
    assert_eq!(job, frozen);
}

