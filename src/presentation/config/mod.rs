mod environment;
mod scaffold_config;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment, UnknownEnvironment};
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    FallbackSetting, JobsSettings, LoggingSettings, ServerSettings, Settings, StorageSettings,
    SynthesisSettings, TranscriptionProviderSetting, TranscriptionSettings,
    TranslationProviderSetting, TranslationSettings,
};
