use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::RegistryError;
use crate::domain::JobId;
use crate::presentation::state::AppState;

use super::error_response::error_response;
use super::job_snapshot::JobSnapshot;

#[derive(Serialize)]
pub struct JobStatusResponse {
    pub process_id: String,
    pub mode: &'static str,
    #[serde(flatten)]
    pub snapshot: JobSnapshot,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<String>,
}

#[tracing::instrument(skip(state))]
pub async fn job_status_handler(
    State(state): State<AppState>,
    Path(process_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match Uuid::parse_str(&process_id) {
        Ok(u) => u,
        Err(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid process ID: {}", process_id),
            );
        }
    };

    match state.registry.get(JobId::from_uuid(uuid)).await {
        Ok(job) => {
            let response = JobStatusResponse {
                process_id: job.id.to_string(),
                mode: job.mode.as_str(),
                created_at: job.created_at.to_rfc3339(),
                updated_at: job.updated_at.to_rfc3339(),
                finished_at: job.finished_at.map(|t| t.to_rfc3339()),
                snapshot: JobSnapshot::from(job),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(RegistryError::NotFound(_)) => error_response(
            StatusCode::NOT_FOUND,
            format!("Process not found: {}", process_id),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch job status");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch job: {}", e),
            )
        }
    }
}
