use std::fmt;

use super::JobStatus;

/// One pipeline step bound to a single external collaborator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Fetch,
    ExtractAudio,
    Transcribe,
    Translate,
    Synthesize,
    Mux,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Fetch => "fetch",
            Stage::ExtractAudio => "extract_audio",
            Stage::Transcribe => "transcribe",
            Stage::Translate => "translate",
            Stage::Synthesize => "synthesize",
            Stage::Mux => "mux",
        }
    }

    pub fn status(&self) -> JobStatus {
        match self {
            Stage::Fetch => JobStatus::Fetching,
            Stage::ExtractAudio => JobStatus::ExtractingAudio,
            Stage::Transcribe => JobStatus::Transcribing,
            Stage::Translate => JobStatus::Translating,
            Stage::Synthesize => JobStatus::Synthesizing,
            Stage::Mux => JobStatus::Muxing,
        }
    }

    /// Progress reported when the stage starts. Strictly increasing in
    /// stage order and always below 100.
    pub fn percent(&self) -> u8 {
        match self {
            Stage::Fetch => 10,
            Stage::ExtractAudio => 25,
            Stage::Transcribe => 45,
            Stage::Translate => 65,
            Stage::Synthesize => 80,
            Stage::Mux => 90,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
