mod types;

pub use types::*;

use crate::Result;
use std::env;
use std::path::Path;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    load_from(config_path).await
}

pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path.as_ref()).await?;
    let mut config: Config = serde_yaml::from_str(&config_str)?;

    // The credential may live outside the config file on deployed hosts.
    if let Ok(api_key) = env::var("PREVIEW_API_KEY") {
        config.backend.api_key = api_key;
    }

    Ok(config)
}
