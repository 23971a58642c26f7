use async_trait::async_trait;

#[async_trait]
pub trait TranslationProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Longest input a single request accepts, in characters. Longer text
    /// is sent in chunks.
    fn max_input_chars(&self) -> Option<usize> {
        None
    }

    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError>;
}

/// Soft failure: consumed by the translation service, never surfaced as a
/// job failure.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("empty translation")]
    EmptyTranslation,
    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),
}
