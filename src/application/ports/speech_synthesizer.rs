use std::path::{Path, PathBuf};

use async_trait::async_trait;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        work_dir: &Path,
    ) -> Result<PathBuf, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("empty text")]
    EmptyText,
    #[error("synthesis failed: {0}")]
    SynthesisFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
