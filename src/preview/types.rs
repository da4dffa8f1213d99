use serde::{Deserialize, Serialize};

/// One user submission, as it arrives at the API boundary.
///
/// Fields default to empty rather than failing deserialization so that a
/// missing field classifies as `INVALID_INPUT` with a request id instead of
/// dying in the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationInput {
    #[serde(default)]
    pub image_data: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub space_type: String,
    #[serde(default)]
    pub image_width: Option<u32>,
    #[serde(default)]
    pub image_height: Option<u32>,
}

/// Closed classification of the room being previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpaceType {
    Bathroom,
    Kitchen,
    Laundry,
    OpenPlan,
}

impl SpaceType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bathroom" => Some(Self::Bathroom),
            "kitchen" => Some(Self::Kitchen),
            "laundry" => Some(Self::Laundry),
            "open-plan" => Some(Self::OpenPlan),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bathroom => "bathroom",
            Self::Kitchen => "kitchen",
            Self::Laundry => "laundry",
            Self::OpenPlan => "open-plan",
        }
    }
}

/// What a single invocation of the handler produced. Exactly one of these is
/// returned per submission; failures are values here, never propagated errors.
#[derive(Debug, Clone)]
pub enum PreviewOutcome {
    Success(PreviewSuccess),
    Failure(PreviewFailure),
}

#[derive(Debug, Clone)]
pub struct PreviewSuccess {
    pub request_id: String,
    pub image_url: String,
    pub description: String,
    pub remaining: Option<u32>,
    pub degraded: bool,
}

#[derive(Debug, Clone)]
pub struct PreviewFailure {
    pub request_id: String,
    pub message: String,
    pub kind: FailureKind,
}

/// Failure taxonomy. Each variant carries only the fields that apply to it,
/// so a match on the kind is enough to know which extras are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidInput {
        reason: String,
    },
    Busy {
        retry_after_seconds: Option<u32>,
    },
    LimitReached {
        remaining: u32,
        retry_after_seconds: Option<u32>,
    },
    ImageUnclear,
    UpstreamBlocked {
        reason: Option<String>,
    },
    ConfigError,
    Unknown {
        reason: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureCode {
    InvalidInput,
    Busy,
    LimitReached,
    ImageUnclear,
    UpstreamBlocked,
    ConfigError,
    Unknown,
}

impl FailureKind {
    pub fn code(&self) -> FailureCode {
        match self {
            Self::InvalidInput { .. } => FailureCode::InvalidInput,
            Self::Busy { .. } => FailureCode::Busy,
            Self::LimitReached { .. } => FailureCode::LimitReached,
            Self::ImageUnclear => FailureCode::ImageUnclear,
            Self::UpstreamBlocked { .. } => FailureCode::UpstreamBlocked,
            Self::ConfigError => FailureCode::ConfigError,
            Self::Unknown { .. } => FailureCode::Unknown,
        }
    }

    /// Whether re-submitting the same input can succeed. A quota failure
    /// becomes retryable only when the backend told us when the window
    /// resets.
    pub fn retryable(&self) -> bool {
        match self {
            Self::Busy { .. } | Self::Unknown { .. } => true,
            Self::LimitReached {
                retry_after_seconds,
                ..
            } => retry_after_seconds.is_some(),
            Self::InvalidInput { .. }
            | Self::ImageUnclear
            | Self::UpstreamBlocked { .. }
            | Self::ConfigError => false,
        }
    }

    pub fn retry_after_seconds(&self) -> Option<u32> {
        match self {
            Self::Busy {
                retry_after_seconds,
            }
            | Self::LimitReached {
                retry_after_seconds,
                ..
            } => *retry_after_seconds,
            _ => None,
        }
    }
}

impl PreviewOutcome {
    pub fn request_id(&self) -> &str {
        match self {
            Self::Success(s) => &s.request_id,
            Self::Failure(f) => &f.request_id,
        }
    }
}
