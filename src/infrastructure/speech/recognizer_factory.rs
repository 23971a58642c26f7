use std::sync::Arc;

use crate::application::ports::{SpeechRecognizer, TranscriptionError};

use super::mock_speech::MockSpeechRecognizer;
use super::openai_whisper_recognizer::OpenAiWhisperRecognizer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecognizerProvider {
    OpenAi,
    Mock,
}

pub struct SpeechRecognizerFactory;

impl SpeechRecognizerFactory {
    pub fn create(
        provider: RecognizerProvider,
        model: &str,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Arc<dyn SpeechRecognizer>, TranscriptionError> {
        match provider {
            RecognizerProvider::OpenAi => {
                let key = api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
                    TranscriptionError::ApiRequestFailed(
                        "API key required for OpenAI Whisper".to_string(),
                    )
                })?;
                let recognizer =
                    OpenAiWhisperRecognizer::new(key, base_url, Some(model.to_string()));
                Ok(Arc::new(recognizer))
            }
            RecognizerProvider::Mock => Ok(Arc::new(MockSpeechRecognizer::default())),
        }
    }
}
