use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{TranslationError, TranslationProvider};
use crate::infrastructure::call_count::CallCount;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockTranslatorBehavior {
    /// Returns `[<lang>] <text>`.
    Working,
    Failing,
    Empty,
    /// Sleeps before answering, for timeout tests.
    Slow { delay_ms: u64 },
}

pub struct MockTranslator {
    name: String,
    behavior: MockTranslatorBehavior,
    max_input_chars: Option<usize>,
    calls: CallCount,
}

impl MockTranslator {
    pub fn new(name: impl Into<String>, behavior: MockTranslatorBehavior) -> Self {
        Self {
            name: name.into(),
            behavior,
            max_input_chars: None,
            calls: CallCount::default(),
        }
    }

    pub fn working(name: impl Into<String>) -> Self {
        Self::new(name, MockTranslatorBehavior::Working)
    }

    pub fn failing(name: impl Into<String>) -> Self {
        Self::new(name, MockTranslatorBehavior::Failing)
    }

    pub fn with_input_limit(mut self, max_chars: usize) -> Self {
        self.max_input_chars = Some(max_chars);
        self
    }

    pub fn calls(&self) -> CallCount {
        self.calls.clone()
    }
}

#[async_trait]
impl TranslationProvider for MockTranslator {
    fn name(&self) -> &str {
        &self.name
    }

    fn max_input_chars(&self) -> Option<usize> {
        self.max_input_chars
    }

    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError> {
        self.calls.hit();
        match self.behavior {
            MockTranslatorBehavior::Working => Ok(format!("[{}] {}", target_lang, text)),
            MockTranslatorBehavior::Failing => Err(TranslationError::ApiRequestFailed(format!(
                "{} is unavailable",
                self.name
            ))),
            MockTranslatorBehavior::Empty => Ok(String::new()),
            MockTranslatorBehavior::Slow { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Ok(format!("[{}] {}", target_lang, text))
            }
        }
    }
}
