use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD as B64;
use thiserror::Error;

use dolista_types::config::AppConfig;

/// Where the app config blob comes from. It is decoded on every request.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Name of the environment variable holding the blob.
    Env(String),
    /// The blob itself.
    Inline(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("app config variable {0} is not set")]
    Missing(String),
    #[error("failed to decode app config: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("failed to parse app config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("app config has an empty telegram token")]
    EmptyToken,
}

impl ConfigSource {
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        match self {
            Self::Env(var) => {
                let raw = std::env::var(var).map_err(|_| ConfigError::Missing(var.clone()))?;
                decode_app_config(&raw)
            }
            Self::Inline(raw) => decode_app_config(raw),
        }
    }
}

/// Decode a base64 (padded or not) JSON app config.
pub fn decode_app_config(raw: &str) -> Result<AppConfig, ConfigError> {
    let unpadded = raw.trim().trim_end_matches('=');
    let bytes = B64.decode(unpadded)?;
    let config: AppConfig = serde_json::from_slice(&bytes)?;

    if config.telegram_token.trim().is_empty() {
        return Err(ConfigError::EmptyToken);
    }

    Ok(config)
}
