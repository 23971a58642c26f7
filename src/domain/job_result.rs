use serde::Serialize;

use super::ArtifactName;

/// Structured payload of a completed job. Absent fields are omitted on the
/// wire so each output mode only exposes what it produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcribed_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<ArtifactName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_file: Option<ArtifactName>,
}
