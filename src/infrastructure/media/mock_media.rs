use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{
    AudioExtractionError, AudioExtractor, FetchError, FetchedMedia, MediaFetcher, MediaMuxer,
    MuxError,
};
use crate::domain::TransformOptions;
use crate::infrastructure::call_count::CallCount;

use super::ytdlp_fetcher::validate_source_url;

/// Accepts any well-formed http(s) URL and writes a placeholder media file.
pub struct MockMediaFetcher {
    title: String,
    fail: bool,
    delay: Duration,
    calls: CallCount,
}

impl MockMediaFetcher {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fail: false,
            delay: Duration::ZERO,
            calls: CallCount::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> CallCount {
        self.calls.clone()
    }
}

impl Default for MockMediaFetcher {
    fn default() -> Self {
        Self::new("Mock Video")
    }
}

#[async_trait]
impl MediaFetcher for MockMediaFetcher {
    async fn fetch(&self, url: &str, work_dir: &Path) -> Result<FetchedMedia, FetchError> {
        self.calls.hit();
        tokio::time::sleep(self.delay).await;
        validate_source_url(url)?;
        if self.fail {
            return Err(FetchError::Unreachable(url.to_string()));
        }
        let path = work_dir.join("source.mp4");
        tokio::fs::write(&path, b"mock video").await?;
        Ok(FetchedMedia {
            path,
            title: self.title.clone(),
        })
    }
}

pub struct MockAudioExtractor {
    fail: bool,
    delay: Duration,
    calls: CallCount,
}

impl MockAudioExtractor {
    pub fn new() -> Self {
        Self {
            fail: false,
            delay: Duration::ZERO,
            calls: CallCount::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> CallCount {
        self.calls.clone()
    }
}

impl Default for MockAudioExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioExtractor for MockAudioExtractor {
    async fn extract(
        &self,
        media: &Path,
        work_dir: &Path,
    ) -> Result<PathBuf, AudioExtractionError> {
        self.calls.hit();
        tokio::time::sleep(self.delay).await;
        if self.fail {
            return Err(AudioExtractionError::NoAudioTrack(
                media.display().to_string(),
            ));
        }
        let output = work_dir.join("audio.mp3");
        tokio::fs::write(&output, b"mock audio").await?;
        Ok(output)
    }
}

pub struct MockMediaMuxer {
    fail: bool,
    calls: CallCount,
}

impl MockMediaMuxer {
    pub fn new() -> Self {
        Self {
            fail: false,
            calls: CallCount::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: CallCount::default(),
        }
    }

    pub fn calls(&self) -> CallCount {
        self.calls.clone()
    }
}

impl Default for MockMediaMuxer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaMuxer for MockMediaMuxer {
    async fn mux(
        &self,
        _video: &Path,
        _audio: &Path,
        _options: TransformOptions,
        work_dir: &Path,
    ) -> Result<PathBuf, MuxError> {
        self.calls.hit();
        if self.fail {
            return Err(MuxError::MuxFailed("mock muxer failure".to_string()));
        }
        let output = work_dir.join("composed.mp4");
        tokio::fs::write(&output, b"mock composed video").await?;
        Ok(output)
    }
}
