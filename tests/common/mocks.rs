use async_trait::async_trait;
use reno_preview::{
    Error, Result,
    backend::{
        BackendRejection, GenerateReply, GenerateRequest, GeneratedImage, GenerationBackend,
        RejectionCode,
    },
};
use std::sync::{Arc, Mutex};

/// Mock generation backend for testing
pub struct MockBackend {
    pub replies: Arc<Mutex<Vec<GenerateReply>>>,
    pub requests: Arc<Mutex<Vec<GenerateRequest>>>,
    pub error: Option<Error>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_replies(self, replies: Vec<GenerateReply>) -> Self {
        *self.replies.lock().unwrap() = replies;
        self
    }

    pub fn with_error(mut self, error: Error) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateReply> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(error.clone());
        }

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::backend("No more mock replies available"));
        }

        Ok(replies.remove(0))
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating test data

pub fn create_generated_image(image_url: &str) -> GenerateReply {
    GenerateReply::Ok(GeneratedImage {
        image_url: image_url.to_string(),
        description: "A freshly renovated space".to_string(),
        remaining: Some(4),
        degraded: false,
    })
}

pub fn create_degraded_image(image_url: &str) -> GenerateReply {
    GenerateReply::Ok(GeneratedImage {
        image_url: image_url.to_string(),
        description: "A simplified preview of the space".to_string(),
        remaining: None,
        degraded: true,
    })
}

pub fn create_rejection(code: RejectionCode) -> GenerateReply {
    GenerateReply::Error(BackendRejection {
        code,
        message: None,
        retry_after_seconds: None,
        remaining: None,
    })
}

pub fn create_busy_rejection(retry_after_seconds: u32) -> GenerateReply {
    GenerateReply::Error(BackendRejection {
        code: RejectionCode::Overloaded,
        message: Some("at concurrency capacity".to_string()),
        retry_after_seconds: Some(retry_after_seconds),
        remaining: None,
    })
}

pub fn create_quota_rejection() -> GenerateReply {
    GenerateReply::Error(BackendRejection {
        code: RejectionCode::QuotaExhausted,
        message: Some("no previews left".to_string()),
        retry_after_seconds: None,
        remaining: Some(0),
    })
}
