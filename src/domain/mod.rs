mod artifact_name;
mod job;
mod job_id;
mod job_result;
mod job_status;
mod output_mode;
mod pipeline_request;
mod stage;
mod voice;

pub use artifact_name::{ArtifactKind, ArtifactName};
pub use job::{Job, JobTransitionError, JobUpdate};
pub use job_id::JobId;
pub use job_result::JobResult;
pub use job_status::JobStatus;
pub use output_mode::OutputMode;
pub use pipeline_request::{PipelineRequest, TransformOptions};
pub use stage::Stage;
pub use voice::{DEFAULT_VOICE, voice_for_language};
