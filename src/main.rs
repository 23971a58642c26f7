use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use dubline::application::ports::{ArtifactStore, JobRegistry, TranslationProvider};
use dubline::application::services::{
    Collaborators, JobReaper, JobRunner, Pipeline, PipelineWorker, ProgressStream, ReaperPolicy,
};
use dubline::infrastructure::media::{
    FfmpegAudioExtractor, FfmpegMuxer, MockAudioExtractor, MockMediaFetcher, MockMediaMuxer,
    YtDlpFetcher,
};
use dubline::infrastructure::observability::{TracingConfig, init_tracing};
use dubline::infrastructure::persistence::InMemoryJobRegistry;
use dubline::infrastructure::speech::{
    EdgeTtsSynthesizer, MockSpeechRecognizer, MockSpeechSynthesizer, RecognizerProvider,
    SpeechRecognizerFactory,
};
use dubline::infrastructure::storage::LocalArtifactStore;
use dubline::infrastructure::translation::{MockTranslator, TranslatorFactory};
use dubline::presentation::config::TranscriptionProviderSetting;
use dubline::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;
    let scaffold_config = ScaffoldConfig::default();

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let registry: Arc<dyn JobRegistry> = Arc::new(InMemoryJobRegistry::new());
    let artifacts: Arc<dyn ArtifactStore> = Arc::new(
        LocalArtifactStore::new(settings.storage.artifact_dir.clone())
            .context("Failed to prepare artifact directory")?,
    );

    let (collaborators, translation) = if scaffold_config.enabled {
        tracing::warn!("Scaffold mode enabled, external tools replaced by mocks");
        let delay = scaffold_config.mock_delay();
        let collaborators = Collaborators {
            fetcher: Arc::new(MockMediaFetcher::default().with_delay(delay)),
            extractor: Arc::new(MockAudioExtractor::new().with_delay(delay)),
            recognizer: Arc::new(MockSpeechRecognizer::default().with_delay(delay)),
            synthesizer: Arc::new(MockSpeechSynthesizer::new().with_delay(delay)),
            muxer: Arc::new(MockMediaMuxer::new()),
        };
        let mock_translator: Arc<dyn TranslationProvider> =
            Arc::new(MockTranslator::working("mock"));
        let translation =
            TranslatorFactory::service_with(vec![mock_translator], &settings.translation);
        (collaborators, translation)
    } else {
        let provider = match settings.transcription.provider {
            TranscriptionProviderSetting::OpenAi => RecognizerProvider::OpenAi,
            TranscriptionProviderSetting::Mock => RecognizerProvider::Mock,
        };
        let recognizer = SpeechRecognizerFactory::create(
            provider,
            &settings.transcription.model,
            settings.transcription.api_key.clone(),
            settings.transcription.base_url.clone(),
        )
        .context("Failed to create speech recognizer")?;

        let tools = &settings.synthesis;
        let collaborators = Collaborators {
            fetcher: Arc::new(YtDlpFetcher::new(tools.ytdlp_program.clone())),
            extractor: Arc::new(FfmpegAudioExtractor::new(tools.ffmpeg_program.clone())),
            recognizer,
            synthesizer: Arc::new(EdgeTtsSynthesizer::new(tools.edge_tts_program.clone())),
            muxer: Arc::new(FfmpegMuxer::new(tools.ffmpeg_program.clone())),
        };
        let translation = TranslatorFactory::create_service(&settings.translation)
            .context("Failed to create translation service")?;
        (collaborators, translation)
    };

    tracing::info!(
        providers = ?translation.provider_names(),
        "Translation providers configured"
    );

    let pipeline = Arc::new(Pipeline::new(
        collaborators,
        Arc::new(translation),
        Arc::clone(&artifacts),
        Arc::clone(&registry),
        settings.storage.work_dir.clone(),
    ));

    let jobs = &settings.jobs;
    let (sender, receiver) = mpsc::channel(jobs.queue_capacity.max(1));
    let worker = PipelineWorker::new(receiver, pipeline, jobs.max_concurrent_jobs);
    let reaper = JobReaper::new(
        Arc::clone(&registry),
        Arc::clone(&artifacts),
        ReaperPolicy {
            interval: Duration::from_secs(jobs.reaper_interval_secs.max(1)),
            eviction_grace: Duration::from_secs(jobs.eviction_grace_secs),
            pending_ttl: Duration::from_secs(jobs.pending_ttl_secs),
            artifact_ttl: Duration::from_secs(settings.storage.artifact_ttl_secs),
        },
    );

    tracing::info!(
        max_concurrent_jobs = jobs.max_concurrent_jobs,
        queue_capacity = jobs.queue_capacity,
        "Spawning background tasks"
    );
    tokio::spawn(worker.run());
    tokio::spawn(reaper.run());

    let state = AppState {
        runner: JobRunner::new(Arc::clone(&registry), sender),
        progress: ProgressStream::new(Arc::clone(&registry)),
        registry,
        artifacts,
        scaffold_config,
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
