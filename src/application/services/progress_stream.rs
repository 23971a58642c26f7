use std::sync::Arc;

use futures::StreamExt;
use futures::stream::BoxStream;

use crate::application::ports::JobRegistry;
use crate::domain::{Job, JobId};

/// Per-job observer over the registry's push channel.
#[derive(Clone)]
pub struct ProgressStream {
    registry: Arc<dyn JobRegistry>,
}

impl ProgressStream {
    pub fn new(registry: Arc<dyn JobRegistry>) -> Self {
        Self { registry }
    }

    /// Yields job snapshots as they change, waiting if the job does not exist
    /// yet. Ends right after the first terminal snapshot, or when the job is
    /// evicted before reaching one.
    pub async fn subscribe(&self, job_id: JobId) -> BoxStream<'static, Job> {
        let mut receiver = self.registry.watch(job_id).await;

        let stream = async_stream::stream! {
            loop {
                let snapshot = receiver.borrow_and_update().clone();
                if let Some(job) = snapshot {
                    let terminal = job.is_terminal();
                    yield job;
                    if terminal {
                        break;
                    }
                }
                if receiver.changed().await.is_err() {
                    tracing::debug!(
                        job_id = %job_id,
                        "Progress channel closed before terminal state"
                    );
                    break;
                }
            }
        };

        stream.boxed()
    }
}
