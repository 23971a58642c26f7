use std::path::{Path, PathBuf};

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedMedia {
    pub path: PathBuf,
    pub title: String,
}

#[async_trait]
pub trait MediaFetcher: Send + Sync {
    /// Downloads the media behind `url` into `work_dir`.
    async fn fetch(&self, url: &str, work_dir: &Path) -> Result<FetchedMedia, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid source url: {0}")]
    InvalidUrl(String),
    #[error("source unreachable: {0}")]
    Unreachable(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
