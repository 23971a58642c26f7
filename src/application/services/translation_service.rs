use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{TranslationError, TranslationProvider};

pub const DEFAULT_MAX_INPUT_CHARS: usize = 450;
pub const DEFAULT_FAILURE_SENTINEL: &str = "ဘာသာပြန်ရာတွင် အဆင်မပြေပါ";

/// What to hand back when every provider failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackPolicy {
    ReturnOriginal,
    Sentinel(String),
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::Sentinel(DEFAULT_FAILURE_SENTINEL.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Translated { text: String, provider: String },
    Fallback { text: String, reason: String },
    Skipped { text: String },
}

impl TranslationOutcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Translated { text, .. } | Self::Fallback { text, .. } => text,
            Self::Skipped { text } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Translated { text, .. } | Self::Fallback { text, .. } => text,
            Self::Skipped { text } => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Ordered provider chain. `translate` never fails: provider errors and
/// timeouts fall through to the next provider and finally to the fallback
/// policy.
pub struct TranslationService {
    providers: Vec<Arc<dyn TranslationProvider>>,
    provider_timeout: Duration,
    fallback: FallbackPolicy,
}

impl TranslationService {
    pub fn new(
        providers: Vec<Arc<dyn TranslationProvider>>,
        provider_timeout: Duration,
        fallback: FallbackPolicy,
    ) -> Self {
        Self {
            providers,
            provider_timeout,
            fallback,
        }
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn translate(&self, text: &str, target_lang: &str) -> TranslationOutcome {
        if text.trim().is_empty() {
            return TranslationOutcome::Skipped {
                text: text.to_string(),
            };
        }

        let mut last_error: Option<TranslationError> = None;

        for provider in &self.providers {
            let attempt = tokio::time::timeout(
                self.provider_timeout,
                translate_within_limit(provider.as_ref(), text, target_lang),
            )
            .await;

            let error = match attempt {
                Ok(Ok(translated)) => {
                    tracing::debug!(provider = provider.name(), "Translation succeeded");
                    return TranslationOutcome::Translated {
                        text: translated,
                        provider: provider.name().to_string(),
                    };
                }
                Ok(Err(e)) => e,
                Err(_) => TranslationError::Timeout(self.provider_timeout),
            };

            tracing::warn!(
                provider = provider.name(),
                error = %error,
                "Translation provider failed, trying next"
            );
            last_error = Some(error);
        }

        let reason = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no translation providers configured".to_string());

        tracing::warn!(reason = %reason, "All translation providers failed");

        let text = match &self.fallback {
            FallbackPolicy::ReturnOriginal => text.to_string(),
            FallbackPolicy::Sentinel(sentinel) => sentinel.clone(),
        };

        TranslationOutcome::Fallback { text, reason }
    }
}

/// Sends `text` whole, or chunk by chunk when the provider caps its input.
/// An empty answer for any chunk fails the whole attempt.
async fn translate_within_limit(
    provider: &dyn TranslationProvider,
    text: &str,
    target_lang: &str,
) -> Result<String, TranslationError> {
    let chunks = match provider.max_input_chars() {
        Some(limit) => split_into_chunks(text, limit),
        None => vec![text],
    };
    if chunks.len() > 1 {
        tracing::debug!(
            provider = provider.name(),
            chunks = chunks.len(),
            "Translation input split to provider limit"
        );
    }

    let mut translated = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let part = provider.translate(chunk, target_lang).await?;
        if part.trim().is_empty() {
            return Err(TranslationError::EmptyTranslation);
        }
        translated.push(part);
    }

    Ok(translated.join(" "))
}

/// Splits `text` into pieces of at most `max_chars` characters, breaking on
/// the last whitespace inside each window when there is one.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut rest = text.trim();

    while !rest.is_empty() {
        let window = truncate_chars(rest, max_chars);
        if window.len() == rest.len() {
            chunks.push(rest);
            break;
        }

        let cut = window
            .rfind(char::is_whitespace)
            .filter(|&idx| idx > 0)
            .unwrap_or(window.len());
        chunks.push(rest[..cut].trim_end());
        rest = rest[cut..].trim_start();
    }

    chunks
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
