use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use futures::{StreamExt, TryStreamExt};
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectMeta, ObjectStore, PutPayload};
use tokio::io::AsyncReadExt;

use crate::application::ports::{ArtifactContent, ArtifactError, ArtifactStore};
use crate::domain::{ArtifactKind, ArtifactName};

const UPLOAD_PART_BYTES: usize = 5 * 1024 * 1024;

/// Flat directory of published artifacts, addressed by generated name.
pub struct LocalArtifactStore {
    inner: Arc<LocalFileSystem>,
    base_path: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ArtifactError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| ArtifactError::Storage(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_path,
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Copies `source` into the store part by part.
    async fn upload(&self, source: &Path, location: &StorePath) -> Result<u64, ArtifactError> {
        let mut file = tokio::fs::File::open(source).await?;
        let mut upload = self
            .inner
            .put_multipart(location)
            .await
            .map_err(|e| ArtifactError::Storage(e.to_string()))?;

        let mut buffer = vec![0u8; UPLOAD_PART_BYTES];
        let mut total_bytes: u64 = 0;

        loop {
            let read = match fill_part(&mut file, &mut buffer).await {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => {
                    let _ = upload.abort().await;
                    return Err(ArtifactError::Io(e));
                }
            };
            total_bytes += read as u64;
            let part = PutPayload::from(Bytes::copy_from_slice(&buffer[..read]));
            if let Err(e) = upload.put_part(part).await {
                let _ = upload.abort().await;
                return Err(ArtifactError::Storage(e.to_string()));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| ArtifactError::Storage(e.to_string()))?;

        Ok(total_bytes)
    }
}

/// Reads until `buffer` is full or the file ends.
async fn fill_part(file: &mut tokio::fs::File, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match file.read(&mut buffer[filled..]).await? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

fn lookup_error(name: &ArtifactName, error: object_store::Error) -> ArtifactError {
    match error {
        object_store::Error::NotFound { .. } => ArtifactError::NotFound(name.to_string()),
        other => ArtifactError::Storage(other.to_string()),
    }
}

fn is_expired(meta: &ObjectMeta, max_age: Duration) -> bool {
    (Utc::now() - meta.last_modified)
        .to_std()
        .map(|age| age >= max_age)
        .unwrap_or(false)
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn publish(
        &self,
        source: &Path,
        kind: ArtifactKind,
    ) -> Result<ArtifactName, ArtifactError> {
        let name = ArtifactName::generate(kind);
        let location = StorePath::from(name.as_str());

        let size = self.upload(source, &location).await?;

        if let Err(e) = tokio::fs::remove_file(source).await {
            tracing::warn!(
                error = %e,
                source = %source.display(),
                "Failed to remove published source file"
            );
        }

        tracing::debug!(
            source = %source.display(),
            artifact = %name,
            size,
            "Artifact stored"
        );
        Ok(name)
    }

    async fn open(&self, name: &ArtifactName) -> Result<ArtifactContent, ArtifactError> {
        let location = StorePath::from(name.as_str());
        let result = self
            .inner
            .get(&location)
            .await
            .map_err(|e| lookup_error(name, e))?;

        let size = result.meta.size as u64;
        let stream = result
            .into_stream()
            .map_err(|e| ArtifactError::Storage(e.to_string()))
            .boxed();

        Ok(ArtifactContent { size, stream })
    }

    async fn purge_expired(&self, max_age: Duration) -> Result<usize, ArtifactError> {
        let objects: Vec<ObjectMeta> = self
            .inner
            .list(None)
            .try_collect()
            .await
            .map_err(|e| ArtifactError::Storage(e.to_string()))?;

        let mut purged = 0;

        for meta in objects {
            let Some(name) = meta.location.filename().and_then(ArtifactName::parse) else {
                continue;
            };
            if !is_expired(&meta, max_age) {
                continue;
            }

            match self.inner.delete(&meta.location).await {
                Ok(()) => purged += 1,
                Err(e) => tracing::warn!(error = %e, artifact = %name, "Failed to purge artifact"),
            }
        }

        Ok(purged)
    }
}
