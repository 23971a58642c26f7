use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{RwLock, watch};
use tracing::instrument;

use crate::application::ports::{JobRegistry, RegistryError};
use crate::domain::{Job, JobId, JobUpdate, OutputMode};

struct Slot {
    sender: watch::Sender<Option<Job>>,
    reserved_at: DateTime<Utc>,
}

impl Slot {
    fn new(job: Option<Job>) -> Self {
        let (sender, _) = watch::channel(job);
        Self {
            sender,
            reserved_at: Utc::now(),
        }
    }

    fn snapshot(&self) -> Option<Job> {
        self.sender.borrow().clone()
    }
}

/// Lock-protected map of job slots. Each slot's watch channel holds the
/// authoritative snapshot; writes replace it while the map lock is held, so
/// readers only ever observe whole snapshots.
#[derive(Default)]
pub struct InMemoryJobRegistry {
    slots: RwLock<HashMap<JobId, Slot>>,
}

impl InMemoryJobRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

fn expired(since: DateTime<Utc>, now: DateTime<Utc>, ttl: Duration) -> bool {
    (now - since)
        .to_std()
        .map(|age| age >= ttl)
        .unwrap_or(false)
}

#[async_trait]
impl JobRegistry for InMemoryJobRegistry {
    #[instrument(skip(self), fields(job_id = %id))]
    async fn create_with_id(&self, id: JobId, mode: OutputMode) -> Result<Job, RegistryError> {
        let job = Job::with_id(id, mode);
        let mut slots = self.slots.write().await;

        match slots.get(&id) {
            Some(slot) if slot.sender.borrow().is_some() => {
                return Err(RegistryError::Conflict(id));
            }
            Some(slot) => {
                slot.sender.send_replace(Some(job.clone()));
            }
            None => {
                slots.insert(id, Slot::new(Some(job.clone())));
            }
        }

        tracing::debug!(mode = %mode, "Job registered");
        Ok(job)
    }

    async fn get(&self, id: JobId) -> Result<Job, RegistryError> {
        let slots = self.slots.read().await;
        slots
            .get(&id)
            .and_then(Slot::snapshot)
            .ok_or(RegistryError::NotFound(id))
    }

    async fn update(&self, id: JobId, update: JobUpdate) -> Result<Job, RegistryError> {
        let slots = self.slots.write().await;
        let slot = slots.get(&id).ok_or(RegistryError::NotFound(id))?;
        let mut job = slot.snapshot().ok_or(RegistryError::NotFound(id))?;

        job.apply(update)
            .map_err(|source| RegistryError::InvalidTransition { id, source })?;

        slot.sender.send_replace(Some(job.clone()));
        Ok(job)
    }

    async fn evict(&self, id: JobId) -> Result<(), RegistryError> {
        let mut slots = self.slots.write().await;
        slots
            .remove(&id)
            .map(|_| ())
            .ok_or(RegistryError::NotFound(id))
    }

    async fn watch(&self, id: JobId) -> watch::Receiver<Option<Job>> {
        {
            let slots = self.slots.read().await;
            if let Some(slot) = slots.get(&id) {
                return slot.sender.subscribe();
            }
        }

        let mut slots = self.slots.write().await;
        slots
            .entry(id)
            .or_insert_with(|| Slot::new(None))
            .sender
            .subscribe()
    }

    async fn evict_expired(
        &self,
        now: DateTime<Utc>,
        grace: Duration,
        pending_ttl: Duration,
    ) -> usize {
        let mut slots = self.slots.write().await;
        let before = slots.len();

        slots.retain(|_, slot| match slot.sender.borrow().as_ref() {
            Some(job) => match job.finished_at {
                Some(finished_at) => !expired(finished_at, now, grace),
                None => true,
            },
            None => {
                slot.sender.receiver_count() > 0 && !expired(slot.reserved_at, now, pending_ttl)
            }
        });

        before - slots.len()
    }

    async fn len(&self) -> usize {
        self.slots
            .read()
            .await
            .values()
            .filter(|slot| slot.sender.borrow().is_some())
            .count()
    }
}
