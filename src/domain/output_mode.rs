use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Stage;

const TRANSCRIPT_ONLY_STAGES: &[Stage] = &[Stage::Fetch, Stage::ExtractAudio, Stage::Transcribe];
const TRANSCRIPT_STAGES: &[Stage] = &[
    Stage::Fetch,
    Stage::ExtractAudio,
    Stage::Transcribe,
    Stage::Translate,
];
const AUDIO_STAGES: &[Stage] = &[
    Stage::Fetch,
    Stage::ExtractAudio,
    Stage::Transcribe,
    Stage::Translate,
    Stage::Synthesize,
];
const VIDEO_STAGES: &[Stage] = &[
    Stage::Fetch,
    Stage::ExtractAudio,
    Stage::Transcribe,
    Stage::Translate,
    Stage::Synthesize,
    Stage::Mux,
];
const ORIGINAL_VIDEO_STAGES: &[Stage] = &[Stage::Fetch];

/// Selects which subset of the stage sequence a job runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    TranscriptOnly,
    Transcript,
    Audio,
    Video,
    OriginalVideo,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::TranscriptOnly => "transcript_only",
            OutputMode::Transcript => "transcript",
            OutputMode::Audio => "audio",
            OutputMode::Video => "video",
            OutputMode::OriginalVideo => "original_video",
        }
    }

    pub fn stages(&self) -> &'static [Stage] {
        match self {
            OutputMode::TranscriptOnly => TRANSCRIPT_ONLY_STAGES,
            OutputMode::Transcript => TRANSCRIPT_STAGES,
            OutputMode::Audio => AUDIO_STAGES,
            OutputMode::Video => VIDEO_STAGES,
            OutputMode::OriginalVideo => ORIGINAL_VIDEO_STAGES,
        }
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transcript_only" => Ok(OutputMode::TranscriptOnly),
            "transcript" => Ok(OutputMode::Transcript),
            "audio" => Ok(OutputMode::Audio),
            "video" => Ok(OutputMode::Video),
            "original_video" => Ok(OutputMode::OriginalVideo),
            other => Err(format!(
                "Invalid output mode: {}. Expected: transcript_only, transcript, audio, video, or original_video",
                other
            )),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
