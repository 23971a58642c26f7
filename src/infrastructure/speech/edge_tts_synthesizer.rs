use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::infrastructure::media::{CommandError, run_command};

/// Drives the `edge-tts` command-line tool.
pub struct EdgeTtsSynthesizer {
    program: String,
}

impl EdgeTtsSynthesizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for EdgeTtsSynthesizer {
    fn default() -> Self {
        Self::new("edge-tts")
    }
}

pub fn edge_tts_args(text_file: &Path, voice: &str, output: &Path) -> Vec<String> {
    vec![
        "--voice".to_string(),
        voice.to_string(),
        "--file".to_string(),
        text_file.display().to_string(),
        "--write-media".to_string(),
        output.display().to_string(),
    ]
}

#[async_trait]
impl SpeechSynthesizer for EdgeTtsSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        work_dir: &Path,
    ) -> Result<PathBuf, SynthesisError> {
        if text.trim().is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        let stem = Uuid::new_v4().simple().to_string();
        let text_file = work_dir.join(format!("tts_{}.txt", stem));
        let output = work_dir.join(format!("tts_{}.mp3", stem));
        tokio::fs::write(&text_file, text).await?;

        tracing::debug!(voice = %voice, chars = text.chars().count(), "Synthesizing speech");

        run_command(&self.program, &edge_tts_args(&text_file, voice, &output))
            .await
            .map_err(|e| match e {
                CommandError::Spawn { source, .. } => SynthesisError::Io(source),
                other => SynthesisError::SynthesisFailed(other.to_string()),
            })?;

        if tokio::fs::metadata(&output).await.is_err() {
            return Err(SynthesisError::SynthesisFailed(
                "edge-tts produced no audio".to_string(),
            ));
        }
        Ok(output)
    }
}
