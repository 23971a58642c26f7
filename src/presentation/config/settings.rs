use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{DEFAULT_FAILURE_SENTINEL, DEFAULT_MAX_INPUT_CHARS};

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub jobs: JobsSettings,
    pub storage: StorageSettings,
    pub translation: TranslationSettings,
    pub transcription: TranscriptionSettings,
    pub synthesis: SynthesisSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobsSettings {
    pub max_concurrent_jobs: usize,
    pub queue_capacity: usize,
    pub eviction_grace_secs: u64,
    pub reaper_interval_secs: u64,
    pub pending_ttl_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub work_dir: PathBuf,
    pub artifact_dir: PathBuf,
    pub artifact_ttl_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    pub providers: Vec<TranslationProviderSetting>,
    pub provider_timeout_secs: u64,
    pub max_input_chars: usize,
    pub fallback: FallbackSetting,
    pub failure_sentinel: String,
    pub source_lang: String,
    pub google_base_url: Option<String>,
    pub mymemory_base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProviderSetting {
    Google,
    #[serde(rename = "mymemory")]
    MyMemory,
    Mock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackSetting {
    Original,
    Sentinel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

/// Command-line tools driven by the media adapters.
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisSettings {
    pub edge_tts_program: String,
    pub ffmpeg_program: String,
    pub ytdlp_program: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers defaults, the optional `appsettings.<env>` file and
    /// `APP_`-prefixed environment variables (`APP_JOBS__QUEUE_CAPACITY=8`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("jobs.max_concurrent_jobs", 2)?
            .set_default("jobs.queue_capacity", 32)?
            .set_default("jobs.eviction_grace_secs", 600)?
            .set_default("jobs.reaper_interval_secs", 60)?
            .set_default("jobs.pending_ttl_secs", 300)?
            .set_default("storage.work_dir", "./work")?
            .set_default("storage.artifact_dir", "./outputs")?
            .set_default("storage.artifact_ttl_secs", 86_400)?
            .set_default("translation.providers", vec!["google", "mymemory"])?
            .set_default("translation.provider_timeout_secs", 10)?
            .set_default("translation.max_input_chars", DEFAULT_MAX_INPUT_CHARS as u64)?
            .set_default("translation.fallback", "sentinel")?
            .set_default("translation.failure_sentinel", DEFAULT_FAILURE_SENTINEL)?
            .set_default("translation.source_lang", "en")?
            .set_default("transcription.provider", "openai")?
            .set_default("transcription.model", "whisper-1")?
            .set_default("synthesis.edge_tts_program", "edge-tts")?
            .set_default("synthesis.ffmpeg_program", "ffmpeg")?
            .set_default("synthesis.ytdlp_program", "yt-dlp")?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&environment.settings_file()).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("translation.providers")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
