//! Configuration: host-supplied settings validated into domain types.

use serde::Deserialize;

use crate::domain::{ApiKey, ValidationError, WebhookUrl};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
/// Settings as stored by the host application.
///
/// Only non-emptiness of the credential is validated here; everything else
/// is optional and falls back to the client defaults.
pub struct Settings {
    pub api_key: String,
    #[serde(default)]
    pub reply_webhook_url: Option<String>,
    #[serde(default)]
    pub send_endpoint: Option<String>,
    #[serde(default)]
    pub status_endpoint: Option<String>,
}

impl Settings {
    /// Parse settings from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Validate the credential.
    pub fn api_key(&self) -> Result<ApiKey, ValidationError> {
        ApiKey::new(self.api_key.as_str())
    }

    /// Validate the reply webhook URL, if one is configured.
    pub fn reply_webhook_url(&self) -> Result<Option<WebhookUrl>, ValidationError> {
        self.reply_webhook_url
            .as_deref()
            .map(WebhookUrl::new)
            .transpose()
    }
}
