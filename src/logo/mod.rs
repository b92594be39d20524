//! Application logo generation.
//!
//! Like discovery, generation is fail-soft: errors are logged and surface
//! as `None`.

mod cache;

pub use cache::{LOGO_KEY, LogoCache};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::client::Client;
use crate::config::{DEFAULT_IMAGE_MODEL, Settings};
use crate::types::GenerateContentRequest;
use crate::{Error, Result};

pub const LOGO_PROMPT: &str = "A professional, minimalist, futuristic logo for an AI application named 'NeurIA'. \
The logo features a stylized human brain integrated with digital neural network nodes and glowing fiber-optic circuits. \
Color palette: neon cyan, vibrant fuchsia, and electric violet over a dark background. \
High contrast, vector style, clean lines, youthful and energetic vibe. 1:1 aspect ratio.";

/// An image held as base64 text, as returned inline by the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoImage {
    pub mime_type: String,
    pub data: String,
}

impl LogoImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// `data:<mime>;base64,<data>`
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    pub fn from_data_uri(uri: &str) -> Result<Self> {
        let invalid = || Error::Parse("not a base64 data URI".into());
        let rest = uri.trim().strip_prefix("data:").ok_or_else(invalid)?;
        let (mime_type, data) = rest.split_once(";base64,").ok_or_else(invalid)?;
        if mime_type.is_empty() || data.is_empty() {
            return Err(invalid());
        }
        Ok(Self::new(mime_type, data))
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(self.data.as_bytes())
            .map_err(|e| Error::Parse(format!("invalid base64 image data: {}", e)))
    }

    /// File extension matching the MIME type.
    pub fn extension(&self) -> &str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "bin",
        }
    }
}

/// Capability that produces the application logo.
#[async_trait]
pub trait LogoGenerator: Send + Sync {
    async fn generate_logo(&self) -> Option<LogoImage>;
}

#[derive(Clone, Debug)]
pub struct GeminiLogoGenerator {
    client: Client,
    model: String,
}

impl GeminiLogoGenerator {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(Client::new(settings)?).with_model(&settings.image_model))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// `Ok(None)` when the model answered without an image.
    pub async fn try_generate(&self) -> Result<Option<LogoImage>> {
        let request = GenerateContentRequest::new(LOGO_PROMPT).with_image_aspect_ratio("1:1");
        let response = self.client.generate_content(&self.model, &request).await?;

        Ok(response
            .inline_data()
            .map(|inline| LogoImage::new(&inline.mime_type, &inline.data)))
    }
}

#[async_trait]
impl LogoGenerator for GeminiLogoGenerator {
    async fn generate_logo(&self) -> Option<LogoImage> {
        match self.try_generate().await {
            Ok(Some(image)) => {
                tracing::debug!(
                    model = %self.model,
                    mime_type = %image.mime_type,
                    "Logo generated"
                );
                Some(image)
            }
            Ok(None) => {
                tracing::warn!(model = %self.model, "Logo response contained no image");
                None
            }
            Err(e) => {
                tracing::warn!(model = %self.model, error = %e, "Logo generation failed");
                None
            }
        }
    }
}
