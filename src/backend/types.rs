use crate::preview::SpaceType;
use serde::{Deserialize, Serialize};

/// Body of the outbound call to the generation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub image: String,
    pub prompt: String,
    pub space_type: SpaceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Reply from the generation service, tagged by its `status` field. The
/// service encodes business rejections in the body rather than bare HTTP
/// statuses, so both arms parse from the same place.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerateReply {
    Ok(GeneratedImage),
    Error(BackendRejection),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub image_url: String,
    pub description: String,
    #[serde(default)]
    pub remaining: Option<u32>,
    #[serde(default)]
    pub degraded: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendRejection {
    pub code: RejectionCode,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub retry_after_seconds: Option<u32>,
    #[serde(default)]
    pub remaining: Option<u32>,
}

/// Rejection codes the service is known to emit. Anything it grows later
/// lands in `Other` and classifies as a retryable unknown downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionCode {
    Overloaded,
    QuotaExhausted,
    ImageUnclear,
    ContentBlocked,
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_generate_request_wire_shape() {
        let request = GenerateRequest {
            image: "aGVsbG8=".to_string(),
            prompt: "warm scandinavian".to_string(),
            space_type: SpaceType::Bathroom,
            width: Some(1024),
            height: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "image": "aGVsbG8=",
                "prompt": "warm scandinavian",
                "spaceType": "bathroom",
                "width": 1024
            })
        );
    }

    #[test]
    fn test_parse_ok_reply() {
        let reply: GenerateReply = serde_json::from_value(json!({
            "status": "ok",
            "imageUrl": "https://cdn.example.com/previews/abc.jpg",
            "description": "A bright, airy kitchen",
            "remaining": 4
        }))
        .unwrap();

        match reply {
            GenerateReply::Ok(image) => {
                assert_eq!(image.image_url, "https://cdn.example.com/previews/abc.jpg");
                assert_eq!(image.remaining, Some(4));
                assert!(!image.degraded);
            }
            GenerateReply::Error(_) => panic!("expected ok reply"),
        }
    }

    #[test]
    fn test_parse_error_reply() {
        let reply: GenerateReply = serde_json::from_value(json!({
            "status": "error",
            "code": "overloaded",
            "message": "at capacity",
            "retryAfterSeconds": 15
        }))
        .unwrap();

        match reply {
            GenerateReply::Error(rejection) => {
                assert_eq!(rejection.code, RejectionCode::Overloaded);
                assert_eq!(rejection.retry_after_seconds, Some(15));
            }
            GenerateReply::Ok(_) => panic!("expected error reply"),
        }
    }

    #[test]
    fn test_unrecognized_rejection_code_parses_as_other() {
        let reply: GenerateReply = serde_json::from_value(json!({
            "status": "error",
            "code": "tea_break"
        }))
        .unwrap();

        match reply {
            GenerateReply::Error(rejection) => {
                assert_eq!(rejection.code, RejectionCode::Other);
                assert_eq!(rejection.message, None);
            }
            GenerateReply::Ok(_) => panic!("expected error reply"),
        }
    }
}
