mod client;
mod types;

pub use client::{GenerationBackend, HttpGenerationClient};
pub use types::{BackendRejection, GenerateReply, GenerateRequest, GeneratedImage, RejectionCode};
