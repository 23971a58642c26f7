use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{AudioExtractionError, AudioExtractor};

use super::command::{CommandError, run_command};

pub struct FfmpegAudioExtractor {
    program: String,
}

impl FfmpegAudioExtractor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for FfmpegAudioExtractor {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

pub fn extract_audio_args(media: &Path, output: &Path) -> Vec<String> {
    vec![
        "-y".to_string(),
        "-i".to_string(),
        media.display().to_string(),
        "-vn".to_string(),
        "-q:a".to_string(),
        "0".to_string(),
        "-map".to_string(),
        "a".to_string(),
        output.display().to_string(),
    ]
}

#[async_trait]
impl AudioExtractor for FfmpegAudioExtractor {
    async fn extract(
        &self,
        media: &Path,
        work_dir: &Path,
    ) -> Result<PathBuf, AudioExtractionError> {
        let output = work_dir.join("audio.mp3");

        run_command(&self.program, &extract_audio_args(media, &output))
            .await
            .map_err(|e| match e {
                CommandError::Spawn { source, .. } => AudioExtractionError::Io(source),
                other if other.stderr().contains("matches no streams") => {
                    AudioExtractionError::NoAudioTrack(media.display().to_string())
                }
                other => AudioExtractionError::ExtractionFailed(other.to_string()),
            })?;

        Ok(output)
    }
}
