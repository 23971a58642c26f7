use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{
    SpeechRecognizer, SpeechSynthesizer, SynthesisError, Transcript, TranscriptionError,
};

pub struct MockSpeechRecognizer {
    transcript: Option<Transcript>,
    delay: Duration,
}

impl MockSpeechRecognizer {
    pub fn new(text: &str, language: &str) -> Self {
        Self {
            transcript: Some(Transcript {
                text: text.to_string(),
                language: language.to_string(),
            }),
            delay: Duration::ZERO,
        }
    }

    pub fn failing() -> Self {
        Self {
            transcript: None,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for MockSpeechRecognizer {
    fn default() -> Self {
        Self::new("Hello from the mock recognizer.", "en")
    }
}

#[async_trait]
impl SpeechRecognizer for MockSpeechRecognizer {
    async fn recognize(&self, _audio: &Path) -> Result<Transcript, TranscriptionError> {
        tokio::time::sleep(self.delay).await;
        self.transcript.clone().ok_or_else(|| {
            TranscriptionError::TranscriptionFailed("mock recognizer failure".to_string())
        })
    }
}

/// Writes the text it is given into an `.mp3`-named file.
pub struct MockSpeechSynthesizer {
    fail: bool,
    delay: Duration,
}

impl MockSpeechSynthesizer {
    pub fn new() -> Self {
        Self {
            fail: false,
            delay: Duration::ZERO,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for MockSpeechSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        work_dir: &Path,
    ) -> Result<PathBuf, SynthesisError> {
        tokio::time::sleep(self.delay).await;
        if self.fail {
            return Err(SynthesisError::SynthesisFailed(
                "mock synthesizer failure".to_string(),
            ));
        }
        let output = work_dir.join("speech.mp3");
        tokio::fs::write(&output, format!("{}: {}", voice, text)).await?;
        Ok(output)
    }
}
