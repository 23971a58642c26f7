use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::TransformOptions;

#[async_trait]
pub trait MediaMuxer: Send + Sync {
    /// Replaces the audio of `video` with `audio`, applying `options` to the
    /// picture.
    async fn mux(
        &self,
        video: &Path,
        audio: &Path,
        options: TransformOptions,
        work_dir: &Path,
    ) -> Result<PathBuf, MuxError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MuxError {
    #[error("mux failed: {0}")]
    MuxFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
