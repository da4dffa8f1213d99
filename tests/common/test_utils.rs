use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reno_preview::preview::GenerationInput;

/// Smallest bytes that read as a JPEG header; enough for a decodable payload.
const JPEG_STUB: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

pub fn encoded_photo() -> String {
    BASE64.encode(JPEG_STUB)
}

/// A submission that passes validation as-is.
pub fn create_valid_input() -> GenerationInput {
    GenerationInput {
        image_data: encoded_photo(),
        prompt: "modern minimal".to_string(),
        space_type: "kitchen".to_string(),
        image_width: Some(1024),
        image_height: Some(768),
    }
}

pub fn create_input(image_data: &str, prompt: &str, space_type: &str) -> GenerationInput {
    GenerationInput {
        image_data: image_data.to_string(),
        prompt: prompt.to_string(),
        space_type: space_type.to_string(),
        image_width: None,
        image_height: None,
    }
}
