use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::application::ports::{ArtifactStore, JobRegistry};

#[derive(Debug, Clone, Copy)]
pub struct ReaperPolicy {
    pub interval: Duration,
    pub eviction_grace: Duration,
    pub pending_ttl: Duration,
    pub artifact_ttl: Duration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub jobs_evicted: usize,
    pub artifacts_purged: usize,
}

/// Periodically evicts finished jobs once their grace period has passed and
/// deletes expired artifacts.
pub struct JobReaper {
    registry: Arc<dyn JobRegistry>,
    artifacts: Arc<dyn ArtifactStore>,
    policy: ReaperPolicy,
}

impl JobReaper {
    pub fn new(
        registry: Arc<dyn JobRegistry>,
        artifacts: Arc<dyn ArtifactStore>,
        policy: ReaperPolicy,
    ) -> Self {
        Self {
            registry,
            artifacts,
            policy,
        }
    }

    pub async fn run(self) {
        tracing::info!(
            interval_secs = self.policy.interval.as_secs(),
            "Job reaper started"
        );
        let mut ticker = tokio::time::interval(self.policy.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let report = self.sweep().await;
            if report != SweepReport::default() {
                tracing::debug!(
                    jobs_evicted = report.jobs_evicted,
                    artifacts_purged = report.artifacts_purged,
                    "Reaper sweep"
                );
            }
        }
    }

    pub async fn sweep(&self) -> SweepReport {
        let jobs_evicted = self
            .registry
            .evict_expired(Utc::now(), self.policy.eviction_grace, self.policy.pending_ttl)
            .await;

        let artifacts_purged = match self.artifacts.purge_expired(self.policy.artifact_ttl).await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(error = %e, "Artifact purge failed");
                0
            }
        };

        SweepReport {
            jobs_evicted,
            artifacts_purged,
        }
    }
}
