use super::types::{GenerateReply, GenerateRequest};
use crate::{Error, Result, config::BackendConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateReply>;
}

/// Production backend speaking JSON over HTTP to the generation service.
pub struct HttpGenerationClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpGenerationClient {
    pub fn new(config: BackendConfig) -> Result<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(Error::config("generation backend endpoint is not set"));
        }
        if config.api_key.trim().is_empty() {
            return Err(Error::config("generation backend credential is not set"));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl GenerationBackend for HttpGenerationClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateReply> {
        debug!(
            space_type = request.space_type.as_str(),
            "Dispatching generation request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::config(format!(
                "generation backend rejected the credential ({})",
                status
            )));
        }

        // Business rejections ride in the body with non-2xx statuses, so the
        // body is parsed regardless of the status code.
        let reply = response.json::<GenerateReply>().await?;

        debug!("Received generation reply");
        Ok(reply)
    }
}
