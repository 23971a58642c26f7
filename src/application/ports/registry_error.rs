use crate::domain::{JobId, JobTransitionError};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("job not found: {0}")]
    NotFound(JobId),
    #[error("invalid transition for job {id}: {source}")]
    InvalidTransition {
        id: JobId,
        #[source]
        source: JobTransitionError,
    },
    #[error("job id collision: {0}")]
    Conflict(JobId),
}
