//! Local post-processing of discovered tools.

use serde::{Deserialize, Serialize};

use super::DiscoveredTool;
use super::query::MAX_DESCRIPTION_CHARS;

/// How far model output is trusted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryPolicy {
    /// Pass results through unchanged.
    #[default]
    TrustModel,
    /// Truncate long descriptions and drop entries without an http(s) link.
    Enforce,
}

impl DiscoveryPolicy {
    pub fn apply(&self, tools: Vec<DiscoveredTool>) -> Vec<DiscoveredTool> {
        match self {
            Self::TrustModel => tools,
            Self::Enforce => tools
                .into_iter()
                .filter(|tool| {
                    let ok = has_web_url(&tool.url);
                    if !ok {
                        tracing::debug!(
                            tool = %tool.name,
                            url = %tool.url,
                            "Dropping tool without a web link"
                        );
                    }
                    ok
                })
                .map(|mut tool| {
                    tool.description = truncate_chars(&tool.description, MAX_DESCRIPTION_CHARS);
                    tool
                })
                .collect(),
        }
    }
}

fn has_web_url(raw: &str) -> bool {
    url::Url::parse(raw.trim())
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
        .unwrap_or(false)
}

/// Result is at most `max` chars, the last being an ellipsis when cut.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(url: &str, description: &str) -> DiscoveredTool {
        DiscoveredTool {
            name: "Tool".into(),
            description: description.into(),
            url: url.into(),
            category: "Video".into(),
            pricing_note: "Freemium".into(),
        }
    }

    #[test]
    fn test_trust_model_is_identity() {
        let tools = vec![tool("not a url", &"x".repeat(400))];
        assert_eq!(DiscoveryPolicy::TrustModel.apply(tools.clone()), tools);
    }

    #[test]
    fn test_enforce_truncates_on_char_boundary() {
        let long = "ñ".repeat(200);
        let result = DiscoveryPolicy::Enforce.apply(vec![tool("https://a.example", &long)]);
        assert_eq!(result[0].description.chars().count(), MAX_DESCRIPTION_CHARS);
        assert!(result[0].description.ends_with('…'));

        let short = "Edits video from text prompts.";
        let result = DiscoveryPolicy::Enforce.apply(vec![tool("https://a.example", short)]);
        assert_eq!(result[0].description, short);
    }

    #[test]
    fn test_enforce_drops_non_web_urls() {
        let result = DiscoveryPolicy::Enforce.apply(vec![
            tool("https://runway.example/app", "ok"),
            tool("ftp://files.example", "ftp"),
            tool("runway", "bare"),
            tool("", "empty"),
        ]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].url, "https://runway.example/app");
    }
}
