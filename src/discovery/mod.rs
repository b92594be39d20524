//! Web-grounded discovery of tools outside the static catalog.
//!
//! Discovery is fail-soft: [`Discoverer::discover`] never returns an error.
//! Transport failures, API errors and malformed responses all collapse into
//! an empty [`DiscoveryResult`] after being logged.

mod gemini;
mod policy;
mod query;

pub use gemini::GeminiDiscoverer;
pub use policy::DiscoveryPolicy;
pub use query::{DISCOVERY_COUNT, DiscoveryRequest, FALLBACK_QUERY, MAX_DESCRIPTION_CHARS};

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::CategorySelection;

/// A tool suggested by the model. Never merged into the static catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredTool {
    pub name: String,
    pub description: String,
    pub url: String,
    /// Categoría de la herramienta
    pub category: String,
    /// Ej: "Gratis", "Freemium", etc.
    pub pricing_note: String,
}

/// A web citation backing a discovery answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub url: String,
}

/// Tools and citations of one discovery call, in the order returned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryResult {
    pub tools: Vec<DiscoveredTool>,
    pub sources: Vec<GroundingSource>,
}

impl DiscoveryResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty() && self.sources.is_empty()
    }
}

/// Capability that finds tools for a query.
#[async_trait]
pub trait Discoverer: Send + Sync {
    async fn discover(&self, query: &str, category: CategorySelection) -> DiscoveryResult;
}
