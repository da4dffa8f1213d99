use crate::preview::{FailureCode, FailureKind, PreviewOutcome};
use serde::{Deserialize, Serialize};

/// Flat wire projection of a `PreviewOutcome`. Optionals that don't apply to
/// the outcome are omitted from the JSON body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreviewResponseBody {
    Success(SuccessBody),
    Failure(FailureBody),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessBody {
    pub request_id: String,
    pub image_url: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u32>,
    pub degraded: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureBody {
    pub request_id: String,
    pub code: FailureCode,
    pub message: String,
    pub retryable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_reached: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need_clearer_photo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<PreviewOutcome> for PreviewResponseBody {
    fn from(outcome: PreviewOutcome) -> Self {
        match outcome {
            PreviewOutcome::Success(success) => Self::Success(SuccessBody {
                request_id: success.request_id,
                image_url: success.image_url,
                description: success.description,
                remaining: success.remaining,
                degraded: success.degraded,
            }),
            PreviewOutcome::Failure(failure) => {
                let code = failure.kind.code();
                let retryable = failure.kind.retryable();
                let retry_after_seconds = failure.kind.retry_after_seconds();

                let mut body = FailureBody {
                    request_id: failure.request_id,
                    code,
                    message: failure.message,
                    retryable,
                    retry_after_seconds,
                    remaining: None,
                    limit_reached: None,
                    need_clearer_photo: None,
                    reason: None,
                };

                match failure.kind {
                    FailureKind::InvalidInput { reason } => {
                        body.reason = Some(reason);
                    }
                    FailureKind::LimitReached { remaining, .. } => {
                        body.remaining = Some(remaining);
                        body.limit_reached = Some(true);
                    }
                    FailureKind::ImageUnclear => {
                        body.need_clearer_photo = Some(true);
                    }
                    FailureKind::UpstreamBlocked { reason } => {
                        body.reason = reason;
                    }
                    FailureKind::Unknown { reason } => {
                        body.reason = reason;
                    }
                    FailureKind::Busy { .. } | FailureKind::ConfigError => {}
                }

                Self::Failure(body)
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
}
