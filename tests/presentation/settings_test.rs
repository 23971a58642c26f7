use std::time::Duration;

use dubline::presentation::config::{
    Environment, FallbackSetting, ScaffoldConfig, Settings, TranscriptionProviderSetting,
    TranslationProviderSetting,
};

#[test]
fn given_no_overrides_when_loading_settings_then_uses_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.port, 8000);
    assert_eq!(settings.jobs.max_concurrent_jobs, 2);
    assert_eq!(settings.jobs.queue_capacity, 32);
    assert_eq!(
        settings.translation.providers,
        vec![
            TranslationProviderSetting::Google,
            TranslationProviderSetting::MyMemory
        ]
    );
    assert_eq!(settings.translation.max_input_chars, 450);
    assert_eq!(settings.translation.fallback, FallbackSetting::Sentinel);
    assert_eq!(
        settings.transcription.provider,
        TranscriptionProviderSetting::OpenAi
    );
    assert_eq!(settings.synthesis.ffmpeg_program, "ffmpeg");
    assert!(settings.translation.google_base_url.is_none());
}

#[test]
fn given_environment_names_when_parsing_then_accepts_known_values_and_aliases() {
    assert_eq!("Production".parse::<Environment>(), Ok(Environment::Prod));
    assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
    assert_eq!(" development ".parse::<Environment>(), Ok(Environment::Local));
    assert!("staging".parse::<Environment>().is_err());
}

#[test]
fn given_environment_when_naming_settings_file_then_uses_lowercase_name() {
    assert_eq!(Environment::Test.settings_file(), "appsettings.test");
    assert_eq!(Environment::Prod.to_string(), "prod");
    assert_eq!(Environment::default(), Environment::Local);
}

#[test]
fn given_scaffold_delay_when_converting_then_returns_duration() {
    let config = ScaffoldConfig {
        enabled: true,
        mock_response_delay_ms: 250,
    };

    assert_eq!(config.mock_delay(), Duration::from_millis(250));
}
