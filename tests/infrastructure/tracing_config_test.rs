use dubline::infrastructure::observability::TracingConfig;
use dubline::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_default_config_when_created_then_environment_and_filter_are_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
    assert!(config.default_filter.contains("dubline=debug"));
}

#[test]
fn given_logging_settings_when_building_then_uses_level_and_json_flag() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&logging, Environment::Prod);

    assert!(config.json_format);
    assert_eq!(config.environment, "prod");
    assert!(config.default_filter.starts_with("warn,"));
}
