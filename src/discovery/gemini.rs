//! Discovery backed by Gemini with Google Search grounding.

use async_trait::async_trait;

use super::{
    DiscoveredTool, Discoverer, DiscoveryPolicy, DiscoveryRequest, DiscoveryResult,
    GroundingSource,
};
use crate::catalog::{CategorySelection, Language};
use crate::client::{Client, gemini_schema};
use crate::config::{DEFAULT_DISCOVERY_MODEL, Settings};
use crate::types::{GenerateContentRequest, GenerateContentResponse, GroundingChunk};
use crate::{Error, Result};

#[derive(Clone, Debug)]
pub struct GeminiDiscoverer {
    client: Client,
    model: String,
    language: Language,
    policy: DiscoveryPolicy,
}

impl GeminiDiscoverer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            model: DEFAULT_DISCOVERY_MODEL.to_string(),
            language: Language::default(),
            policy: DiscoveryPolicy::default(),
        }
    }

    /// Fails only when the settings carry no API key.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(Client::new(settings)?).with_model(&settings.discovery_model))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_policy(mut self, policy: DiscoveryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn build_request(request: &DiscoveryRequest) -> GenerateContentRequest {
        GenerateContentRequest::new(request.instruction())
            .with_google_search()
            .with_json_schema(gemini_schema::<Vec<DiscoveredTool>>())
    }

    /// Error-propagating form of [`Discoverer::discover`].
    pub async fn try_discover(&self, request: &DiscoveryRequest) -> Result<DiscoveryResult> {
        let body = Self::build_request(request);
        let response = self.client.generate_content(&self.model, &body).await?;
        let result = parse_response(&response)?;

        Ok(DiscoveryResult {
            tools: self.policy.apply(result.tools),
            sources: result.sources,
        })
    }
}

#[async_trait]
impl Discoverer for GeminiDiscoverer {
    async fn discover(&self, query: &str, category: CategorySelection) -> DiscoveryResult {
        let request = DiscoveryRequest::normalize(query, category, self.language);

        match self.try_discover(&request).await {
            Ok(result) => {
                tracing::debug!(
                    query = request.query(),
                    %category,
                    model = %self.model,
                    tools = result.tools.len(),
                    sources = result.sources.len(),
                    "Discovery completed"
                );
                result
            }
            Err(e) => {
                tracing::warn!(
                    query = request.query(),
                    %category,
                    model = %self.model,
                    error = %e,
                    "Discovery failed, returning no results"
                );
                DiscoveryResult::empty()
            }
        }
    }
}

/// The tool list must be the JSON text of the first candidate. Missing or
/// malformed text is an error so the caller sees no partial result.
pub(crate) fn parse_response(response: &GenerateContentResponse) -> Result<DiscoveryResult> {
    let text = response
        .text()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| Error::Parse("response carries no text".into()))?;

    let tools: Vec<DiscoveredTool> = serde_json::from_str(strip_code_fence(&text))
        .map_err(|e| Error::Parse(format!("response is not a tool list: {}", e)))?;

    Ok(DiscoveryResult {
        tools,
        sources: extract_sources(response.grounding_chunks()),
    })
}

/// Keeps chunks with both a title and a URL, in order.
pub(crate) fn extract_sources(chunks: &[GroundingChunk]) -> Vec<GroundingSource> {
    chunks
        .iter()
        .filter_map(|chunk| {
            let web = chunk.web.as_ref()?;
            let title = web.title.as_deref().map(str::trim).filter(|t| !t.is_empty());
            let url = web.uri.as_deref().map(str::trim).filter(|u| !u.is_empty());
            match (title, url) {
                (Some(title), Some(url)) => Some(GroundingSource {
                    title: title.to_string(),
                    url: url.to_string(),
                }),
                _ => {
                    tracing::trace!(?chunk, "Dropping incomplete grounding chunk");
                    None
                }
            }
        })
        .collect()
}

/// Some models wrap JSON mode output in a markdown fence anyway.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}
