use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{TranslationError, TranslationProvider};

const SUPPORTED_TARGETS: &[&str] = &["my", "en", "th", "zh", "ja"];
const DEFAULT_TARGET: &str = "my";

/// MyMemory translation API. Only a fixed set of targets is mapped; anything
/// else is sent as Burmese. The free endpoint rejects long queries, so the
/// provider advertises `max_input_chars`.
pub struct MyMemoryTranslator {
    client: reqwest::Client,
    base_url: String,
    source_lang: String,
    max_input_chars: usize,
}

#[derive(Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
    #[serde(rename = "responseStatus")]
    response_status: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl MyMemoryTranslator {
    pub fn new(
        client: reqwest::Client,
        base_url: Option<String>,
        source_lang: String,
        max_input_chars: usize,
    ) -> Self {
        Self {
            client,
            base_url: base_url
                .unwrap_or_else(|| "https://api.mymemory.translated.net".to_string()),
            source_lang,
            max_input_chars: max_input_chars.max(1),
        }
    }
}

pub fn mymemory_target(lang: &str) -> &'static str {
    SUPPORTED_TARGETS
        .iter()
        .find(|code| code.eq_ignore_ascii_case(lang))
        .copied()
        .unwrap_or(DEFAULT_TARGET)
}

fn status_ok(status: Option<&serde_json::Value>) -> bool {
    match status {
        None => true,
        Some(serde_json::Value::Number(n)) => n.as_u64() == Some(200),
        Some(serde_json::Value::String(s)) => s == "200",
        Some(_) => false,
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryTranslator {
    fn name(&self) -> &str {
        "mymemory"
    }

    fn max_input_chars(&self) -> Option<usize> {
        Some(self.max_input_chars)
    }

    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError> {
        let url = format!("{}/get", self.base_url.trim_end_matches('/'));
        let langpair = format!("{}|{}", self.source_lang, mymemory_target(target_lang));

        let response = self
            .client
            .get(&url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await
            .map_err(|e| TranslationError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            return Err(TranslationError::ApiRequestFailed(format!(
                "status {}",
                response.status()
            )));
        }

        let body: MyMemoryResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(format!("body: {}", e)))?;

        if !status_ok(body.response_status.as_ref()) {
            return Err(TranslationError::ApiRequestFailed(format!(
                "response status {}",
                body.response_status.unwrap_or_default()
            )));
        }

        body.response_data
            .map(|data| data.translated_text)
            .ok_or_else(|| TranslationError::InvalidResponse("missing responseData".to_string()))
    }
}
