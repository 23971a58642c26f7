use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::domain::{Job, JobId, JobUpdate, OutputMode};

use super::RegistryError;

/// Concurrency-safe store of live jobs. One writer per job (its pipeline
/// task), any number of readers.
#[async_trait]
pub trait JobRegistry: Send + Sync {
    /// Allocates a fresh id and registers a `queued` job for it.
    async fn create(&self, mode: OutputMode) -> Result<Job, RegistryError> {
        self.create_with_id(JobId::new(), mode).await
    }

    async fn create_with_id(&self, id: JobId, mode: OutputMode) -> Result<Job, RegistryError>;

    async fn get(&self, id: JobId) -> Result<Job, RegistryError>;

    /// Atomically merges `update` and returns the new snapshot.
    async fn update(&self, id: JobId, update: JobUpdate) -> Result<Job, RegistryError>;

    async fn evict(&self, id: JobId) -> Result<(), RegistryError>;

    /// Push channel of snapshots for `id`. Holds `None` until the job is
    /// created, so subscribing ahead of creation is allowed.
    async fn watch(&self, id: JobId) -> watch::Receiver<Option<Job>>;

    /// Drops terminal jobs finished more than `grace` ago, and pending
    /// subscriptions that are older than `pending_ttl` or have no receiver
    /// left. Returns how many entries went.
    async fn evict_expired(
        &self,
        now: DateTime<Utc>,
        grace: Duration,
        pending_ttl: Duration,
    ) -> usize;

    async fn len(&self) -> usize;
}
