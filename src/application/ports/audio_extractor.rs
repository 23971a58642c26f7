use std::path::{Path, PathBuf};

use async_trait::async_trait;

#[async_trait]
pub trait AudioExtractor: Send + Sync {
    async fn extract(&self, media: &Path, work_dir: &Path) -> Result<PathBuf, AudioExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioExtractionError {
    #[error("no audio track: {0}")]
    NoAudioTrack(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
