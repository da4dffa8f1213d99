use super::types::{HealthBody, PreviewResponseBody};
use crate::preview::{FailureKind, GenerationInput, PreviewHandler, PreviewOutcome};
use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::Json,
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<PreviewHandler>,
}

pub async fn generate_preview(
    State(state): State<AppState>,
    Json(input): Json<GenerationInput>,
) -> (StatusCode, HeaderMap, Json<PreviewResponseBody>) {
    info!(space_type = %input.space_type, "Received preview request");

    let outcome = state.handler.generate(input).await;

    let status = status_for(&outcome);
    let mut headers = HeaderMap::new();
    if let PreviewOutcome::Failure(failure) = &outcome {
        if let Some(seconds) = failure.kind.retry_after_seconds() {
            headers.insert(header::RETRY_AFTER, HeaderValue::from(seconds));
        }
    }

    (status, headers, Json(PreviewResponseBody::from(outcome)))
}

pub async fn healthz() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

fn status_for(outcome: &PreviewOutcome) -> StatusCode {
    match outcome {
        PreviewOutcome::Success(_) => StatusCode::OK,
        PreviewOutcome::Failure(failure) => match &failure.kind {
            FailureKind::InvalidInput { .. } | FailureKind::ImageUnclear => StatusCode::BAD_REQUEST,
            FailureKind::Busy { .. } | FailureKind::LimitReached { .. } => {
                StatusCode::TOO_MANY_REQUESTS
            }
            FailureKind::UpstreamBlocked { .. } | FailureKind::Unknown { .. } => {
                StatusCode::BAD_GATEWAY
            }
            FailureKind::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
        },
    }
}
