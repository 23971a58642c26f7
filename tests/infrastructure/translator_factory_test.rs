use dubline::infrastructure::translation::TranslatorFactory;
use dubline::presentation::config::{
    FallbackSetting, TranslationProviderSetting, TranslationSettings,
};

fn settings(
    providers: Vec<TranslationProviderSetting>,
    fallback: FallbackSetting,
) -> TranslationSettings {
    TranslationSettings {
        providers,
        provider_timeout_secs: 5,
        max_input_chars: 450,
        fallback,
        failure_sentinel: "failed".to_string(),
        source_lang: "en".to_string(),
        google_base_url: None,
        mymemory_base_url: None,
    }
}

#[test]
fn given_provider_list_when_creating_then_keeps_configured_order() {
    let providers = TranslatorFactory::create_providers(&settings(
        vec![
            TranslationProviderSetting::MyMemory,
            TranslationProviderSetting::Google,
        ],
        FallbackSetting::Sentinel,
    ))
    .unwrap();

    let names: Vec<&str> = providers.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["mymemory", "google"]);
}

#[tokio::test]
async fn given_sentinel_setting_when_all_fail_then_service_returns_configured_sentinel() {
    let service = TranslatorFactory::service_with(
        Vec::new(),
        &settings(Vec::new(), FallbackSetting::Sentinel),
    );

    let outcome = service.translate("Hello", "my").await;

    assert_eq!(outcome.text(), "failed");
}

#[tokio::test]
async fn given_original_setting_when_all_fail_then_service_returns_input() {
    let service = TranslatorFactory::service_with(
        Vec::new(),
        &settings(Vec::new(), FallbackSetting::Original),
    );

    let outcome = service.translate("Hello", "my").await;

    assert_eq!(outcome.text(), "Hello");
}

#[tokio::test]
async fn given_mock_provider_setting_when_translating_then_uses_mock() {
    let service = TranslatorFactory::create_service(&settings(
        vec![TranslationProviderSetting::Mock],
        FallbackSetting::Sentinel,
    ))
    .unwrap();

    let outcome = service.translate("Hello", "ja").await;

    assert_eq!(outcome.text(), "[ja] Hello");
    assert_eq!(service.provider_names(), vec!["mock"]);
}
