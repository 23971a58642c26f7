use std::fmt;

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Audio,
    Video,
}

impl ArtifactKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Audio => "mp3",
            Self::Video => "mp4",
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Audio => "audio/mpeg",
            Self::Video => "video/mp4",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "mp3" => Some(Self::Audio),
            "mp4" => Some(Self::Video),
            _ => None,
        }
    }
}

/// Generated filename of a published output artifact. Always a single path
/// component, so it is safe to join onto the artifact directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ArtifactName(String);

impl ArtifactName {
    pub fn generate(kind: ArtifactKind) -> Self {
        Self(format!(
            "{}_{}.{}",
            kind.prefix(),
            Uuid::new_v4().simple(),
            kind.extension()
        ))
    }

    /// Accepts only names of the shape `<stem>.<mp3|mp4>` made of ASCII
    /// alphanumerics, `_` and `-`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (stem, ext) = raw.rsplit_once('.')?;
        ArtifactKind::from_extension(ext)?;
        let valid_stem = !stem.is_empty()
            && stem
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        valid_stem.then(|| Self(raw.to_string()))
    }

    pub fn kind(&self) -> ArtifactKind {
        self.0
            .rsplit_once('.')
            .and_then(|(_, ext)| ArtifactKind::from_extension(ext))
            .unwrap_or(ArtifactKind::Video)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
