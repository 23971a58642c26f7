use std::io;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::{ArtifactKind, ArtifactName};

/// Readable body of a stored artifact.
pub struct ArtifactContent {
    pub size: u64,
    pub stream: BoxStream<'static, Result<Bytes, ArtifactError>>,
}

#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Moves a produced file into the store under a generated name.
    async fn publish(&self, source: &Path, kind: ArtifactKind)
    -> Result<ArtifactName, ArtifactError>;

    async fn open(&self, name: &ArtifactName) -> Result<ArtifactContent, ArtifactError>;

    /// Deletes artifacts older than `max_age`. Returns how many were removed.
    async fn purge_expired(&self, max_age: Duration) -> Result<usize, ArtifactError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
