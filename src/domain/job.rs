use chrono::{DateTime, Utc};

use super::{JobId, JobResult, JobStatus, OutputMode};

#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: JobId,
    pub mode: OutputMode,
    pub status: JobStatus,
    pub percent: u8,
    pub message: String,
    pub result: Option<JobResult>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

/// Partial job state merged atomically into the current snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobUpdate {
    pub status: Option<JobStatus>,
    pub percent: Option<u8>,
    pub message: Option<String>,
    pub result: Option<JobResult>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobTransitionError {
    #[error("job is frozen in terminal state {0}")]
    Frozen(JobStatus),
    #[error("status cannot move from {from} to {to}")]
    StatusRegression { from: JobStatus, to: JobStatus },
    #[error("percent cannot move from {from} to {to}")]
    PercentRegression { from: u8, to: u8 },
    #[error("percent {0} is out of range")]
    PercentOutOfRange(u8),
    #[error("percent 100 is reserved for completed jobs")]
    PrematureCompletion,
}

impl Job {
    pub fn new(mode: OutputMode) -> Self {
        Self::with_id(JobId::new(), mode)
    }

    pub fn with_id(id: JobId, mode: OutputMode) -> Self {
        let now = Utc::now();
        Self {
            id,
            mode,
            status: JobStatus::Queued,
            percent: 0,
            message: "Queued".to_string(),
            result: None,
            error: None,
            created_at: now,
            updated_at: now,
            finished_at: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Merges `update` into this job, rejecting any change that would break
    /// the forward-only lifecycle. On error the job is left untouched.
    pub fn apply(&mut self, update: JobUpdate) -> Result<(), JobTransitionError> {
        if self.is_terminal() {
            return Err(JobTransitionError::Frozen(self.status));
        }

        let status = update.status.unwrap_or(self.status);
        if !self.status.can_transition_to(status) {
            return Err(JobTransitionError::StatusRegression {
                from: self.status,
                to: status,
            });
        }

        let percent = match (status, update.percent) {
            (JobStatus::Completed, _) => 100,
            (_, Some(p)) => p,
            (_, None) => self.percent,
        };
        if percent > 100 {
            return Err(JobTransitionError::PercentOutOfRange(percent));
        }
        if percent < self.percent {
            return Err(JobTransitionError::PercentRegression {
                from: self.percent,
                to: percent,
            });
        }
        if percent == 100 && status != JobStatus::Completed {
            return Err(JobTransitionError::PrematureCompletion);
        }

        let now = Utc::now();
        self.status = status;
        self.percent = percent;
        if let Some(message) = update.message {
            self.message = message;
        }
        if let Some(result) = update.result {
            self.result = Some(result);
        }
        if let Some(error) = update.error {
            self.error = Some(error);
        }
        self.updated_at = now;
        if status.is_terminal() {
            self.finished_at = Some(now);
        }
        Ok(())
    }
}

impl JobUpdate {
    pub fn status(status: JobStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn with_percent(mut self, percent: u8) -> Self {
        self.percent = Some(percent);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_result(mut self, result: JobResult) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}
