use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::application::ports::{JobRegistry, RegistryError};
use crate::domain::{JobId, PipelineRequest};

pub struct PipelineMessage {
    pub job_id: JobId,
    pub request: PipelineRequest,
}

/// Admits submissions onto the bounded pipeline queue. Never waits for a
/// job to run.
#[derive(Clone)]
pub struct JobRunner {
    registry: Arc<dyn JobRegistry>,
    sender: mpsc::Sender<PipelineMessage>,
}

impl JobRunner {
    pub fn new(registry: Arc<dyn JobRegistry>, sender: mpsc::Sender<PipelineMessage>) -> Self {
        Self { registry, sender }
    }

    /// Registers a `queued` job and hands it to the worker. Over capacity the
    /// job is dropped again and the submission rejected.
    pub async fn submit(&self, request: PipelineRequest) -> Result<JobId, RunnerError> {
        let job = self.registry.create(request.mode).await?;
        let job_id = job.id;

        let rejection = match self.sender.try_send(PipelineMessage { job_id, request }) {
            Ok(()) => {
                tracing::debug!(job_id = %job_id, "Job enqueued");
                return Ok(job_id);
            }
            Err(TrySendError::Full(_)) => RunnerError::QueueFull,
            Err(TrySendError::Closed(_)) => RunnerError::WorkerUnavailable,
        };

        tracing::warn!(job_id = %job_id, reason = %rejection, "Job submission rejected");
        if let Err(e) = self.registry.evict(job_id).await {
            tracing::warn!(error = %e, "Failed to evict rejected job");
        }
        Err(rejection)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("job queue is full")]
    QueueFull,
    #[error("pipeline worker unavailable")]
    WorkerUnavailable,
    #[error("job registry: {0}")]
    Registry(#[from] RegistryError),
}
