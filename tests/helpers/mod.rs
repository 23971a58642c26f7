use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tempfile::TempDir;
use tokio::sync::watch;

use futures::TryStreamExt;

use dubline::application::ports::{
    ArtifactStore, JobRegistry, RegistryError, TranslationProvider,
};
use dubline::application::services::{
    Collaborators, FallbackPolicy, Pipeline, TranslationService,
};
use dubline::domain::{ArtifactName, Job, JobId, JobStatus, JobUpdate, OutputMode};
use dubline::infrastructure::media::{MockAudioExtractor, MockMediaFetcher, MockMediaMuxer};
use dubline::infrastructure::persistence::InMemoryJobRegistry;
use dubline::infrastructure::speech::{MockSpeechRecognizer, MockSpeechSynthesizer};
use dubline::infrastructure::storage::LocalArtifactStore;
use dubline::infrastructure::translation::MockTranslator;

pub const TEST_URL: &str = "https://video.example.com/watch?v=abc123";

pub fn mock_collaborators() -> Collaborators {
    Collaborators {
        fetcher: Arc::new(MockMediaFetcher::new("Test Clip")),
        extractor: Arc::new(MockAudioExtractor::new()),
        recognizer: Arc::new(MockSpeechRecognizer::new("Hello world", "en")),
        synthesizer: Arc::new(MockSpeechSynthesizer::new()),
        muxer: Arc::new(MockMediaMuxer::new()),
    }
}

pub fn translation_with(
    providers: Vec<Arc<dyn TranslationProvider>>,
    fallback: FallbackPolicy,
) -> TranslationService {
    TranslationService::new(providers, Duration::from_secs(2), fallback)
}

pub fn working_translation() -> TranslationService {
    let provider: Arc<dyn TranslationProvider> = Arc::new(MockTranslator::working("mock"));
    translation_with(vec![provider], FallbackPolicy::default())
}

pub async fn read_artifact(store: &dyn ArtifactStore, name: &ArtifactName) -> Vec<u8> {
    let content = store.open(name).await.unwrap();
    let bytes: Vec<u8> = content
        .stream
        .map_ok(|chunk| chunk.to_vec())
        .try_concat()
        .await
        .unwrap();
    assert_eq!(bytes.len() as u64, content.size);
    bytes
}

/// Pipeline wired to mocks, an in-memory registry and a temporary
/// artifact directory.
pub struct PipelineHarness {
    pub registry: Arc<RecordingRegistry>,
    pub artifacts: Arc<LocalArtifactStore>,
    pub pipeline: Arc<Pipeline>,
    pub work_root: PathBuf,
    _dir: TempDir,
}

impl PipelineHarness {
    pub fn new(collaborators: Collaborators, translation: TranslationService) -> Self {
        let dir = TempDir::new().unwrap();
        let work_root = dir.path().join("work");
        let registry = Arc::new(RecordingRegistry::default());
        let artifacts = Arc::new(LocalArtifactStore::new(dir.path().join("outputs")).unwrap());
        let pipeline = Arc::new(Pipeline::new(
            collaborators,
            Arc::new(translation),
            artifacts.clone(),
            registry.clone(),
            work_root.clone(),
        ));

        Self {
            registry,
            artifacts,
            pipeline,
            work_root,
            _dir: dir,
        }
    }

    pub fn with_mocks() -> Self {
        Self::new(mock_collaborators(), working_translation())
    }
}

/// Registry decorator that keeps every snapshot written through it, so
/// tests can assert on the full transition history.
#[derive(Default)]
pub struct RecordingRegistry {
    inner: InMemoryJobRegistry,
    history: Mutex<Vec<Job>>,
}

impl RecordingRegistry {
    pub fn history(&self, id: JobId) -> Vec<Job> {
        self.history
            .lock()
            .unwrap()
            .iter()
            .filter(|job| job.id == id)
            .cloned()
            .collect()
    }

    pub fn statuses(&self, id: JobId) -> Vec<JobStatus> {
        self.history(id).iter().map(|job| job.status).collect()
    }

    fn record(&self, job: &Job) {
        self.history.lock().unwrap().push(job.clone());
    }
}

#[async_trait]
impl JobRegistry for RecordingRegistry {
    async fn create_with_id(&self, id: JobId, mode: OutputMode) -> Result<Job, RegistryError> {
        let job = self.inner.create_with_id(id, mode).await?;
        self.record(&job);
        Ok(job)
    }

    async fn get(&self, id: JobId) -> Result<Job, RegistryError> {
        self.inner.get(id).await
    }

    async fn update(&self, id: JobId, update: JobUpdate) -> Result<Job, RegistryError> {
        let job = self.inner.update(id, update).await?;
        self.record(&job);
        Ok(job)
    }

    async fn evict(&self, id: JobId) -> Result<(), RegistryError> {
        self.inner.evict(id).await
    }

    async fn watch(&self, id: JobId) -> watch::Receiver<Option<Job>> {
        self.inner.watch(id).await
    }

    async fn evict_expired(
        &self,
        now: DateTime<Utc>,
        grace: Duration,
        pending_ttl: Duration,
    ) -> usize {
        self.inner.evict_expired(now, grace, pending_ttl).await
    }

    async fn len(&self) -> usize {
        self.inner.len().await
    }
}
