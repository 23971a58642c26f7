use serde::Serialize;

use crate::domain::{Job, JobResult};

/// Wire form of a job, shared by the progress events and the status endpoint.
#[derive(Debug, Serialize)]
pub struct JobSnapshot {
    pub status: &'static str,
    pub percent: u8,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JobResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Job> for JobSnapshot {
    fn from(job: Job) -> Self {
        Self {
            status: job.status.as_str(),
            percent: job.percent,
            message: job.message,
            result: job.result,
            error: job.error,
        }
    }
}
