use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{
    ArtifactError, ArtifactStore, AudioExtractionError, AudioExtractor, FetchError, FetchedMedia,
    JobRegistry, MediaFetcher, MediaMuxer, MuxError, RegistryError, SpeechRecognizer,
    SpeechSynthesizer, SynthesisError, Transcript, TranscriptionError,
};
use crate::domain::{
    ArtifactKind, ArtifactName, JobId, JobResult, JobStatus, JobUpdate, OutputMode,
    PipelineRequest, Stage, voice_for_language,
};

use super::TranslationService;

/// The external collaborators a pipeline drives, one per stage.
#[derive(Clone)]
pub struct Collaborators {
    pub fetcher: Arc<dyn MediaFetcher>,
    pub extractor: Arc<dyn AudioExtractor>,
    pub recognizer: Arc<dyn SpeechRecognizer>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    pub muxer: Arc<dyn MediaMuxer>,
}

/// Runs the stage list of a job's output mode, reporting progress to the
/// registry before each stage and recording the terminal state.
pub struct Pipeline {
    collaborators: Collaborators,
    translation: Arc<TranslationService>,
    artifacts: Arc<dyn ArtifactStore>,
    registry: Arc<dyn JobRegistry>,
    work_root: PathBuf,
}

#[derive(Default)]
struct StageOutputs {
    media: Option<FetchedMedia>,
    audio: Option<PathBuf>,
    transcript: Option<Transcript>,
    translated: Option<String>,
    speech: Option<PathBuf>,
    composed: Option<PathBuf>,
}

impl Pipeline {
    pub fn new(
        collaborators: Collaborators,
        translation: Arc<TranslationService>,
        artifacts: Arc<dyn ArtifactStore>,
        registry: Arc<dyn JobRegistry>,
        work_root: PathBuf,
    ) -> Self {
        Self {
            collaborators,
            translation,
            artifacts,
            registry,
            work_root,
        }
    }

    /// Executes the job to a terminal state. The returned error mirrors what
    /// was recorded on the job.
    pub async fn run(
        &self,
        job_id: JobId,
        request: &PipelineRequest,
    ) -> Result<JobResult, PipelineError> {
        tracing::info!(
            mode = %request.mode,
            target_lang = %request.target_lang,
            "Pipeline started"
        );

        let work_dir = self.work_root.join(job_id.to_string());
        let outcome = match tokio::fs::create_dir_all(&work_dir).await {
            Ok(()) => self.execute(job_id, request, &work_dir).await,
            Err(e) => Err(PipelineError::Workspace(e)),
        };

        if let Err(e) = tokio::fs::remove_dir_all(&work_dir).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    error = %e,
                    path = %work_dir.display(),
                    "Failed to remove work directory"
                );
            }
        }

        match outcome {
            Ok(result) => {
                self.registry
                    .update(
                        job_id,
                        JobUpdate::status(JobStatus::Completed)
                            .with_message("Completed")
                            .with_result(result.clone()),
                    )
                    .await?;
                tracing::info!("Pipeline completed");
                Ok(result)
            }
            Err(e) => {
                let error_msg = e.to_string();
                let stage = e.stage().map(|stage| stage.to_string()).unwrap_or_default();
                tracing::error!(error = %error_msg, stage = %stage, "Pipeline failed");
                if let Err(update_err) = self
                    .registry
                    .update(
                        job_id,
                        JobUpdate::status(JobStatus::Failed)
                            .with_message("Processing failed")
                            .with_error(error_msg),
                    )
                    .await
                {
                    tracing::error!(error = %update_err, "Failed to record job failure");
                }
                Err(e)
            }
        }
    }

    async fn execute(
        &self,
        job_id: JobId,
        request: &PipelineRequest,
        work_dir: &Path,
    ) -> Result<JobResult, PipelineError> {
        let mut outputs = StageOutputs::default();

        for &stage in request.mode.stages() {
            self.begin(job_id, stage, stage_message(stage, request))
                .await?;
            self.run_stage(stage, request, work_dir, &mut outputs).await?;
        }

        self.finish(request.mode, outputs).await
    }

    async fn run_stage(
        &self,
        stage: Stage,
        request: &PipelineRequest,
        work_dir: &Path,
        outputs: &mut StageOutputs,
    ) -> Result<(), PipelineError> {
        match stage {
            Stage::Fetch => {
                let media = self
                    .collaborators
                    .fetcher
                    .fetch(&request.url, work_dir)
                    .await
                    .map_err(PipelineError::Fetch)?;
                tracing::debug!(
                    title = %media.title,
                    path = %media.path.display(),
                    "Media fetched"
                );
                outputs.media = Some(media);
            }
            Stage::ExtractAudio => {
                let media = required(stage, outputs.media.as_ref())?;
                let audio = self
                    .collaborators
                    .extractor
                    .extract(&media.path, work_dir)
                    .await
                    .map_err(PipelineError::AudioExtraction)?;
                outputs.audio = Some(audio);
            }
            Stage::Transcribe => {
                let audio = required(stage, outputs.audio.as_ref())?;
                let transcript = self
                    .collaborators
                    .recognizer
                    .recognize(audio)
                    .await
                    .map_err(PipelineError::Transcription)?;
                tracing::debug!(
                    language = %transcript.language,
                    chars = transcript.text.chars().count(),
                    "Speech transcribed"
                );
                outputs.transcript = Some(transcript);
            }
            Stage::Translate => {
                let transcript = required(stage, outputs.transcript.as_ref())?;
                let outcome = self
                    .translation
                    .translate(&transcript.text, &request.target_lang)
                    .await;
                if outcome.is_fallback() {
                    tracing::warn!("Continuing with fallback translation");
                }
                outputs.translated = Some(outcome.into_text());
            }
            Stage::Synthesize => {
                let text = required(stage, outputs.translated.as_ref())?;
                let voice = voice_for_language(&request.target_lang);
                let speech = self
                    .collaborators
                    .synthesizer
                    .synthesize(text, voice, work_dir)
                    .await
                    .map_err(PipelineError::Synthesis)?;
                outputs.speech = Some(speech);
            }
            Stage::Mux => {
                let media = required(stage, outputs.media.as_ref())?;
                let speech = required(stage, outputs.speech.as_ref())?;
                let composed = self
                    .collaborators
                    .muxer
                    .mux(&media.path, speech, request.options, work_dir)
                    .await
                    .map_err(PipelineError::Mux)?;
                outputs.composed = Some(composed);
            }
        }
        Ok(())
    }

    async fn finish(
        &self,
        mode: OutputMode,
        outputs: StageOutputs,
    ) -> Result<JobResult, PipelineError> {
        let mut result = JobResult {
            title: outputs.media.as_ref().map(|m| m.title.clone()),
            ..JobResult::default()
        };

        if let Some(transcript) = outputs.transcript {
            result.original_lang = Some(transcript.language);
            result.transcribed_text = Some(transcript.text);
        }
        result.translated_text = outputs.translated;

        if let Some(speech) = outputs.speech {
            result.audio_file = Some(self.publish(&speech, ArtifactKind::Audio).await?);
        }
        if let Some(composed) = outputs.composed {
            result.video_file = Some(self.publish(&composed, ArtifactKind::Video).await?);
        }
        if mode == OutputMode::OriginalVideo {
            if let Some(media) = outputs.media {
                result.video_file = Some(self.publish(&media.path, ArtifactKind::Video).await?);
            }
        }

        Ok(result)
    }

    async fn begin(
        &self,
        job_id: JobId,
        stage: Stage,
        message: String,
    ) -> Result<(), PipelineError> {
        tracing::info!(stage = %stage, percent = stage.percent(), "Stage started");
        self.registry
            .update(
                job_id,
                JobUpdate::status(stage.status())
                    .with_percent(stage.percent())
                    .with_message(message),
            )
            .await?;
        Ok(())
    }

    async fn publish(
        &self,
        path: &Path,
        kind: ArtifactKind,
    ) -> Result<ArtifactName, PipelineError> {
        let name = self
            .artifacts
            .publish(path, kind)
            .await
            .map_err(PipelineError::Artifact)?;
        tracing::info!(artifact = %name, "Artifact published");
        Ok(name)
    }
}

fn required<T>(stage: Stage, input: Option<&T>) -> Result<&T, PipelineError> {
    input.ok_or(PipelineError::MissingInput(stage))
}

fn stage_message(stage: Stage, request: &PipelineRequest) -> String {
    match stage {
        Stage::Fetch => "Downloading media".to_string(),
        Stage::ExtractAudio => "Extracting audio".to_string(),
        Stage::Transcribe => "Transcribing speech".to_string(),
        Stage::Translate => format!("Translating to {}", request.target_lang),
        Stage::Synthesize => "Synthesizing speech".to_string(),
        Stage::Mux => "Composing video".to_string(),
    }
}

/// Pipeline-fatal errors, tagged by the stage that raised them. Translation
/// failures never appear here.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("fetch failed: {0}")]
    Fetch(FetchError),
    #[error("extract_audio failed: {0}")]
    AudioExtraction(AudioExtractionError),
    #[error("transcribe failed: {0}")]
    Transcription(TranscriptionError),
    #[error("synthesize failed: {0}")]
    Synthesis(SynthesisError),
    #[error("mux failed: {0}")]
    Mux(MuxError),
    #[error("{0} failed: missing input from previous stage")]
    MissingInput(Stage),
    #[error("publishing artifact failed: {0}")]
    Artifact(ArtifactError),
    #[error("work directory: {0}")]
    Workspace(std::io::Error),
    #[error("job registry: {0}")]
    Registry(#[from] RegistryError),
}

impl PipelineError {
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Fetch(_) => Some(Stage::Fetch),
            Self::AudioExtraction(_) => Some(Stage::ExtractAudio),
            Self::Transcription(_) => Some(Stage::Transcribe),
            Self::Synthesis(_) => Some(Stage::Synthesize),
            Self::Mux(_) => Some(Stage::Mux),
            Self::MissingInput(stage) => Some(*stage),
            Self::Artifact(_) | Self::Workspace(_) | Self::Registry(_) => None,
        }
    }
}
