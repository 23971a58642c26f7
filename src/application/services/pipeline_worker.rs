use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tracing::Instrument;

use super::{Pipeline, PipelineMessage};

/// Drains the pipeline queue, running at most `max_concurrent_jobs` jobs at
/// once. The queue is only read while a slot is free, so a full pool backs
/// up into the bounded channel.
pub struct PipelineWorker {
    receiver: mpsc::Receiver<PipelineMessage>,
    pipeline: Arc<Pipeline>,
    slots: Arc<Semaphore>,
    max_concurrent_jobs: usize,
}

impl PipelineWorker {
    pub fn new(
        receiver: mpsc::Receiver<PipelineMessage>,
        pipeline: Arc<Pipeline>,
        max_concurrent_jobs: usize,
    ) -> Self {
        let max_concurrent_jobs = max_concurrent_jobs.max(1);
        Self {
            receiver,
            pipeline,
            slots: Arc::new(Semaphore::new(max_concurrent_jobs)),
            max_concurrent_jobs,
        }
    }

    pub async fn run(mut self) {
        tracing::info!(
            max_concurrent_jobs = self.max_concurrent_jobs,
            "Pipeline worker started"
        );

        loop {
            let Ok(permit) = Arc::clone(&self.slots).acquire_owned().await else {
                break;
            };
            let Some(msg) = self.receiver.recv().await else {
                break;
            };

            let span = tracing::info_span!(
                "pipeline_job",
                job_id = %msg.job_id,
                mode = %msg.request.mode,
            );
            let pipeline = Arc::clone(&self.pipeline);

            tokio::spawn(
                async move {
                    let _permit = permit;
                    if let Err(e) = pipeline.run(msg.job_id, &msg.request).await {
                        tracing::debug!(error = %e, "Pipeline job ended with error");
                    }
                }
                .instrument(span),
            );
        }

        tracing::info!("Pipeline worker stopped: channel closed");
    }
}
