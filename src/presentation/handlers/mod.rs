mod download;
mod error_response;
mod health;
mod job_snapshot;
mod job_status;
mod process;
mod progress;

pub use download::download_handler;
pub use error_response::ErrorResponse;
pub use health::health_handler;
pub use job_snapshot::JobSnapshot;
pub use job_status::{JobStatusResponse, job_status_handler};
pub use process::{ProcessRequest, ProcessResponse, process_handler};
pub use progress::{progress_event, progress_handler};
