use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{TranslationError, TranslationProvider};
use crate::application::services::{FallbackPolicy, TranslationService};
use crate::presentation::config::{
    FallbackSetting, TranslationProviderSetting, TranslationSettings,
};

use super::google_web_translator::GoogleWebTranslator;
use super::mock_translator::MockTranslator;
use super::mymemory_translator::MyMemoryTranslator;

pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Builds the provider chain in configured order.
    pub fn create_providers(
        settings: &TranslationSettings,
    ) -> Result<Vec<Arc<dyn TranslationProvider>>, TranslationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.provider_timeout_secs))
            .build()
            .map_err(|e| TranslationError::ApiRequestFailed(format!("client: {}", e)))?;

        let providers = settings
            .providers
            .iter()
            .map(|provider| -> Arc<dyn TranslationProvider> {
                match provider {
                    TranslationProviderSetting::Google => Arc::new(GoogleWebTranslator::new(
                        client.clone(),
                        settings.google_base_url.clone(),
                    )),
                    TranslationProviderSetting::MyMemory => Arc::new(MyMemoryTranslator::new(
                        client.clone(),
                        settings.mymemory_base_url.clone(),
                        settings.source_lang.clone(),
                        settings.max_input_chars,
                    )),
                    TranslationProviderSetting::Mock => Arc::new(MockTranslator::working("mock")),
                }
            })
            .collect();

        Ok(providers)
    }

    pub fn create_service(
        settings: &TranslationSettings,
    ) -> Result<TranslationService, TranslationError> {
        let providers = Self::create_providers(settings)?;
        Ok(Self::service_with(providers, settings))
    }

    pub fn service_with(
        providers: Vec<Arc<dyn TranslationProvider>>,
        settings: &TranslationSettings,
    ) -> TranslationService {
        let fallback = match settings.fallback {
            FallbackSetting::Original => FallbackPolicy::ReturnOriginal,
            FallbackSetting::Sentinel => {
                FallbackPolicy::Sentinel(settings.failure_sentinel.clone())
            }
        };

        TranslationService::new(
            providers,
            Duration::from_secs(settings.provider_timeout_secs),
            fallback,
        )
    }
}
