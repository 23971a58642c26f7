use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{MediaMuxer, MuxError};
use crate::domain::TransformOptions;

use super::command::{CommandError, run_command};

const COLOR_ADJUST_FILTER: &str = "eq=brightness=0.05:contrast=1.2:saturation=1.2";

pub struct FfmpegMuxer {
    program: String,
}

impl FfmpegMuxer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for FfmpegMuxer {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

/// Video filter chain for the requested transforms; `null` when none apply.
pub fn video_filter(options: TransformOptions) -> String {
    let mut filters = Vec::new();
    if options.mirror {
        filters.push("hflip");
    }
    if options.color_adjust {
        filters.push(COLOR_ADJUST_FILTER);
    }
    if filters.is_empty() {
        "null".to_string()
    } else {
        filters.join(",")
    }
}

pub fn mux_args(
    video: &Path,
    audio: &Path,
    options: TransformOptions,
    output: &Path,
) -> Vec<String> {
    vec![
        "-y".to_string(),
        "-i".to_string(),
        video.display().to_string(),
        "-i".to_string(),
        audio.display().to_string(),
        "-filter_complex".to_string(),
        format!("[0:v]{}[v]", video_filter(options)),
        "-map".to_string(),
        "[v]".to_string(),
        "-map".to_string(),
        "1:a:0".to_string(),
        "-c:v".to_string(),
        "libx264".to_string(),
        "-preset".to_string(),
        "fast".to_string(),
        "-c:a".to_string(),
        "aac".to_string(),
        "-b:a".to_string(),
        "192k".to_string(),
        "-shortest".to_string(),
        output.display().to_string(),
    ]
}

#[async_trait]
impl MediaMuxer for FfmpegMuxer {
    async fn mux(
        &self,
        video: &Path,
        audio: &Path,
        options: TransformOptions,
        work_dir: &Path,
    ) -> Result<PathBuf, MuxError> {
        let output = work_dir.join("composed.mp4");

        tracing::debug!(filter = %video_filter(options), "Composing video");

        run_command(&self.program, &mux_args(video, audio, options, &output))
            .await
            .map_err(|e| match e {
                CommandError::Spawn { source, .. } => MuxError::Io(source),
                other => MuxError::MuxFailed(other.to_string()),
            })?;

        Ok(output)
    }
}
