use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::services::RunnerError;
use crate::domain::{OutputMode, PipelineRequest, TransformOptions};
use crate::infrastructure::media::validate_source_url;
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub option: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    #[serde(default = "default_enabled")]
    pub mirror: bool,
    #[serde(default = "default_enabled")]
    pub color: bool,
}

fn default_target_lang() -> String {
    "my".to_string()
}

fn default_enabled() -> bool {
    true
}

#[derive(Serialize)]
pub struct ProcessResponse {
    pub process_id: String,
}

#[tracing::instrument(
    skip(state, request),
    fields(option = %request.option, target_lang = %request.target_lang)
)]
pub async fn process_handler(
    State(state): State<AppState>,
    Json(request): Json<ProcessRequest>,
) -> impl IntoResponse {
    if request.url.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "URL is required");
    }

    let mode: OutputMode = match request.option.parse() {
        Ok(mode) => mode,
        Err(e) => {
            tracing::warn!(option = %request.option, "Rejected unknown output mode");
            return error_response(StatusCode::BAD_REQUEST, e);
        }
    };

    if let Err(e) = validate_source_url(&request.url) {
        tracing::warn!(url = %sanitize_for_log(&request.url), "Rejected source URL");
        return error_response(StatusCode::BAD_REQUEST, e.to_string());
    }

    let target_lang = request.target_lang.trim();
    if target_lang.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "target_lang must not be empty");
    }

    tracing::info!(
        url = %sanitize_for_log(&request.url),
        mode = %mode,
        "Processing request received"
    );

    let pipeline_request = PipelineRequest::new(request.url.trim(), mode, target_lang)
        .with_options(TransformOptions {
            mirror: request.mirror,
            color_adjust: request.color,
        });

    match state.runner.submit(pipeline_request).await {
        Ok(job_id) => (
            StatusCode::ACCEPTED,
            Json(ProcessResponse {
                process_id: job_id.to_string(),
            }),
        )
            .into_response(),
        Err(e @ (RunnerError::QueueFull | RunnerError::WorkerUnavailable)) => {
            tracing::warn!(error = %e, "Job submission rejected");
            error_response(StatusCode::SERVICE_UNAVAILABLE, e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to submit job");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to submit job: {}", e),
            )
        }
    }
}
