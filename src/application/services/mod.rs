mod job_reaper;
mod job_runner;
mod pipeline;
mod pipeline_worker;
mod progress_stream;
mod translation_service;

pub use job_reaper::{JobReaper, ReaperPolicy, SweepReport};
pub use job_runner::{JobRunner, PipelineMessage, RunnerError};
pub use pipeline::{Collaborators, Pipeline, PipelineError};
pub use pipeline_worker::PipelineWorker;
pub use progress_stream::ProgressStream;
pub use translation_service::{
    DEFAULT_FAILURE_SENTINEL, DEFAULT_MAX_INPUT_CHARS, FallbackPolicy, TranslationOutcome,
    TranslationService, split_into_chunks,
};
