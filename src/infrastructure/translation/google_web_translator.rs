use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::{TranslationError, TranslationProvider};

/// Public Google Translate web endpoint (`client=gtx`).
pub struct GoogleWebTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleWebTranslator {
    pub fn new(client: reqwest::Client, base_url: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url
                .unwrap_or_else(|| "https://translate.googleapis.com".to_string()),
        }
    }
}

/// Joins the translated segments of a `translate_a/single` response.
pub fn parse_google_response(body: &Value) -> Result<String, TranslationError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::InvalidResponse("missing segment list".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    Ok(text)
}

#[async_trait]
impl TranslationProvider for GoogleWebTranslator {
    fn name(&self) -> &str {
        "google"
    }

    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError> {
        let url = format!(
            "{}/translate_a/single",
            self.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            return Err(TranslationError::ApiRequestFailed(format!(
                "status {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(format!("body: {}", e)))?;

        parse_google_response(&body)
    }
}
