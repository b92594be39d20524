//! Runtime settings for the Gemini-backed services.
//!
//! Loaded from any [`ConfigProvider`]. [`Settings::from_env`] reads the
//! `NEURIA_` prefixed environment and the usual Gemini key variables.

use std::time::Duration;

use secrecy::SecretString;

use super::env::EnvConfigProvider;
use super::provider::{ConfigProvider, ConfigProviderExt};
use super::{ConfigError, ConfigResult};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_DISCOVERY_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

const KEY_API_KEY: &str = "api.key";
const KEY_BASE_URL: &str = "base.url";
const KEY_DISCOVERY_MODEL: &str = "discovery.model";
const KEY_IMAGE_MODEL: &str = "image.model";
const KEY_TIMEOUT_SECS: &str = "timeout.secs";

/// Unprefixed variables checked for the API key, in order.
const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

#[derive(Clone, Debug)]
pub struct Settings {
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub discovery_model: String,
    pub image_model: String,
    pub timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            discovery_model: DEFAULT_DISCOVERY_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout: None,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from `provider`, keeping defaults for absent keys.
    pub async fn load(provider: &dyn ConfigProvider) -> ConfigResult<Self> {
        let mut settings = Self::default();

        if let Some(key) = provider.get_raw(KEY_API_KEY).await? {
            settings.api_key = Some(SecretString::from(key));
        }
        if let Some(url) = provider.get_raw(KEY_BASE_URL).await? {
            settings.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(model) = provider.get_raw(KEY_DISCOVERY_MODEL).await? {
            settings.discovery_model = model;
        }
        if let Some(model) = provider.get_raw(KEY_IMAGE_MODEL).await? {
            settings.image_model = model;
        }
        if let Some(raw) = provider.get_raw(KEY_TIMEOUT_SECS).await? {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: KEY_TIMEOUT_SECS.to_string(),
                message: format!("expected whole seconds, got {:?}", raw),
            })?;
            settings.timeout = Some(Duration::from_secs(secs));
        }

        tracing::debug!(
            provider = provider.name(),
            base_url = %settings.base_url,
            discovery_model = %settings.discovery_model,
            image_model = %settings.image_model,
            has_api_key = settings.api_key.is_some(),
            "Loaded settings"
        );
        Ok(settings)
    }

    /// `NEURIA_*` variables, with the key falling back to `GEMINI_API_KEY`
    /// and then `API_KEY`.
    pub async fn from_env() -> ConfigResult<Self> {
        let mut settings = Self::load(&EnvConfigProvider::prefixed("NEURIA_")).await?;

        if settings.api_key.is_none() {
            let unprefixed = EnvConfigProvider::new();
            for var in API_KEY_VARS {
                let key = var.to_lowercase().replace('_', ".");
                if let Some(value) = unprefixed.get_parsed::<String>(&key).await {
                    settings.api_key = Some(SecretString::from(value));
                    break;
                }
            }
        }
        Ok(settings)
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_discovery_model(mut self, model: impl Into<String>) -> Self {
        self.discovery_model = model.into();
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigProvider;
    use secrecy::ExposeSecret;

    #[tokio::test]
    async fn test_defaults_when_empty() {
        let settings = Settings::load(&MemoryConfigProvider::new()).await.unwrap();
        assert!(settings.api_key.is_none());
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.discovery_model, DEFAULT_DISCOVERY_MODEL);
        assert_eq!(settings.image_model, DEFAULT_IMAGE_MODEL);
        assert!(settings.timeout.is_none());
    }

    #[tokio::test]
    async fn test_load_overrides() {
        let provider = MemoryConfigProvider::new();
        provider.insert("api.key", "secret").await;
        provider.insert("base.url", "http://localhost:8080/").await;
        provider.insert("discovery.model", "gemini-2.5-pro").await;
        provider.insert("timeout.secs", "30").await;

        let settings = Settings::load(&provider).await.unwrap();
        assert_eq!(
            settings.api_key.as_ref().map(|k| k.expose_secret()),
            Some("secret")
        );
        assert_eq!(settings.base_url, "http://localhost:8080");
        assert_eq!(settings.discovery_model, "gemini-2.5-pro");
        assert_eq!(settings.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn test_invalid_timeout() {
        let provider = MemoryConfigProvider::new();
        provider.insert("timeout.secs", "soon").await;
        let err = Settings::load(&provider).await.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_debug_redacts_key() {
        let settings = Settings::new().with_api_key("super-secret");
        assert!(!format!("{:?}", settings).contains("super-secret"));
    }
}
