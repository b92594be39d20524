//! Gemini REST client.

pub mod error;
pub mod schema;

pub use error::{ErrorDetail, ErrorResponse};
pub use schema::{gemini_schema, transform_for_gemini};

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::config::{DEFAULT_BASE_URL, Settings};
use crate::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{Error, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl Client {
    /// Fails with [`Error::Config`] when no API key is configured.
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut builder = Self::builder().base_url(&settings.base_url);
        if let Some(key) = &settings.api_key {
            builder = builder.api_key(key.clone());
        }
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    pub fn with_http(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<SecretString>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint(model);
        tracing::debug!(%model, tools = request.tools.len(), "Sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(request)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| Error::Parse(e.to_string()))
    }

    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let error = ErrorResponse::parse(status, &text);
        tracing::warn!(status, error = %error, "Gemini API returned an error");
        Err(error)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn api_key(mut self, key: impl Into<SecretString>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .filter(|k| !k.expose_secret().trim().is_empty())
            .ok_or_else(|| {
                Error::Config(
                    "Gemini API key is not set (GEMINI_API_KEY, API_KEY or NEURIA_API_KEY)".into(),
                )
            })?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(Error::Network)?;

        Ok(Client::with_http(
            http,
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            api_key,
        ))
    }
}
