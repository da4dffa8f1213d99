use super::types::{
    FailureKind, GenerationInput, PreviewFailure, PreviewOutcome, PreviewSuccess, SpaceType,
};
use crate::{
    Error,
    backend::{BackendRejection, GenerateReply, GenerateRequest, GenerationBackend, RejectionCode},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use tracing::{error, info, warn};
use uuid::Uuid;

pub struct PreviewHandler {
    backend: Box<dyn GenerationBackend>,
}

impl PreviewHandler {
    pub fn new(backend: Box<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Runs one submission end to end: validate, dispatch once to the
    /// backend, classify. Always resolves; every failure mode comes back as
    /// a `PreviewOutcome::Failure` carrying a fresh request id.
    pub async fn generate(&self, input: GenerationInput) -> PreviewOutcome {
        let request_id = Uuid::new_v4().to_string();

        let space_type = match validate(&input) {
            Ok(space_type) => space_type,
            Err(reason) => {
                warn!(%request_id, %reason, "Rejected preview submission");
                return failure(
                    request_id,
                    format!("We couldn't use that submission: {}.", reason),
                    FailureKind::InvalidInput { reason },
                );
            }
        };

        let request = GenerateRequest {
            image: input.image_data,
            prompt: input.prompt,
            space_type,
            width: input.image_width,
            height: input.image_height,
        };

        match self.backend.generate(request).await {
            Ok(GenerateReply::Ok(image)) => {
                if image.image_url.is_empty() {
                    warn!(%request_id, "Backend reply carried no image URL");
                    return failure(
                        request_id,
                        "Something went wrong while generating your preview. Please try again."
                            .to_string(),
                        FailureKind::Unknown {
                            reason: Some("backend reply carried no image URL".to_string()),
                        },
                    );
                }

                info!(%request_id, degraded = image.degraded, "Generated preview");
                PreviewOutcome::Success(PreviewSuccess {
                    request_id,
                    image_url: image.image_url,
                    description: image.description,
                    remaining: image.remaining,
                    degraded: image.degraded,
                })
            }
            Ok(GenerateReply::Error(rejection)) => classify_rejection(request_id, rejection),
            Err(e) => classify_error(request_id, e),
        }
    }
}

/// Checks the submission against the closed input contract. Dimensions are
/// advisory hints and never gate validation.
fn validate(input: &GenerationInput) -> std::result::Result<SpaceType, String> {
    let image_data = input.image_data.trim();
    if image_data.is_empty() {
        return Err("no photo was attached".to_string());
    }
    match BASE64.decode(image_data) {
        Ok(bytes) if !bytes.is_empty() => {}
        _ => return Err("the photo could not be decoded".to_string()),
    }
    if input.prompt.trim().is_empty() {
        return Err("the style prompt is empty".to_string());
    }
    SpaceType::parse(&input.space_type)
        .ok_or_else(|| format!("unrecognized space type '{}'", input.space_type))
}

fn classify_rejection(request_id: String, rejection: BackendRejection) -> PreviewOutcome {
    match rejection.code {
        RejectionCode::Overloaded => {
            info!(%request_id, retry_after = ?rejection.retry_after_seconds, "Backend at capacity");
            failure(
                request_id,
                "The preview studio is busy right now. Please try again in a moment.".to_string(),
                FailureKind::Busy {
                    retry_after_seconds: rejection.retry_after_seconds,
                },
            )
        }
        RejectionCode::QuotaExhausted => {
            info!(%request_id, "Preview quota exhausted");
            failure(
                request_id,
                "You've used all of your preview credits for now. Wait for your quota to reset \
                 or get in touch to unlock more."
                    .to_string(),
                FailureKind::LimitReached {
                    remaining: 0,
                    retry_after_seconds: rejection.retry_after_seconds,
                },
            )
        }
        RejectionCode::ImageUnclear => {
            info!(%request_id, "Backend could not read the photo");
            failure(
                request_id,
                "We couldn't read that photo clearly. Please upload a sharper, well-lit photo \
                 of the room."
                    .to_string(),
                FailureKind::ImageUnclear,
            )
        }
        RejectionCode::ContentBlocked => {
            // Whatever detail the safety layer sent stays here; only a
            // generic reason leaves the handler.
            warn!(%request_id, detail = ?rejection.message, "Backend safety layer blocked the request");
            failure(
                request_id,
                "This request can't be previewed. Please try a different photo or prompt."
                    .to_string(),
                FailureKind::UpstreamBlocked {
                    reason: Some("declined by the content-safety filter".to_string()),
                },
            )
        }
        RejectionCode::Other => {
            warn!(%request_id, detail = ?rejection.message, "Backend sent an unrecognized rejection");
            failure(
                request_id,
                "Something went wrong while generating your preview. Please try again."
                    .to_string(),
                FailureKind::Unknown {
                    reason: rejection.message,
                },
            )
        }
    }
}

fn classify_error(request_id: String, error: Error) -> PreviewOutcome {
    match error {
        Error::Config(detail) => {
            error!(%request_id, %detail, "Generation backend misconfigured");
            failure(
                request_id,
                "The preview service isn't available right now. Please try again later."
                    .to_string(),
                FailureKind::ConfigError,
            )
        }
        e => {
            warn!(%request_id, error = %e, "Generation call failed");
            failure(
                request_id,
                "Something went wrong while generating your preview. Please try again."
                    .to_string(),
                FailureKind::Unknown {
                    reason: Some(e.to_string()),
                },
            )
        }
    }
}

fn failure(request_id: String, message: String, kind: FailureKind) -> PreviewOutcome {
    PreviewOutcome::Failure(PreviewFailure {
        request_id,
        message,
        kind,
    })
}
