use std::convert::Infallible;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::StreamExt;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::JobId;
use crate::presentation::state::AppState;

use super::error_response::error_response;
use super::job_snapshot::JobSnapshot;

const KEEP_ALIVE_SECONDS: u64 = 15;

/// JSON data event for one snapshot. A payload that fails to serialize is
/// logged and skipped.
pub fn progress_event<T: Serialize>(payload: &T) -> Option<Event> {
    match Event::default().json_data(payload) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize progress event");
            None
        }
    }
}

/// Server-sent events for one job. Each event carries a [`JobSnapshot`]; the
/// stream closes after the terminal event.
#[tracing::instrument(skip(state))]
pub async fn progress_handler(
    State(state): State<AppState>,
    Path(process_id): Path<String>,
) -> impl IntoResponse {
    let job_id = match Uuid::parse_str(&process_id) {
        Ok(uuid) => JobId::from_uuid(uuid),
        Err(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid process ID: {}", process_id),
            );
        }
    };

    let mut snapshots = state.progress.subscribe(job_id).await;

    let sse_stream = async_stream::stream! {
        while let Some(job) = snapshots.next().await {
            if let Some(event) = progress_event(&JobSnapshot::from(job)) {
                yield Ok::<_, Infallible>(event);
            }
        }
        tracing::debug!(job_id = %job_id, "Progress stream finished");
    };

    Sse::new(sse_stream)
        .keep_alive(
            KeepAlive::new()
                .interval(Duration::from_secs(KEEP_ALIVE_SECONDS))
                .text("keep-alive"),
        )
        .into_response()
}
