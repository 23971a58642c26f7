use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::ports::ArtifactError;
use crate::domain::ArtifactName;
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[tracing::instrument(skip(state))]
pub async fn download_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> impl IntoResponse {
    let Some(name) = ArtifactName::parse(&filename) else {
        tracing::warn!(filename = %filename, "Rejected artifact name");
        return error_response(StatusCode::NOT_FOUND, format!("File not found: {}", filename));
    };

    let content = match state.artifacts.open(&name).await {
        Ok(content) => content,
        Err(ArtifactError::NotFound(_)) => {
            return error_response(StatusCode::NOT_FOUND, format!("File not found: {}", filename));
        }
        Err(e) => {
            tracing::error!(error = %e, artifact = %name, "Failed to open artifact");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file");
        }
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, name.kind().as_mime())
        .header(header::CONTENT_LENGTH, content.size)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", name),
        )
        .body(Body::from_stream(content.stream))
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to build download response");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file")
        })
}
