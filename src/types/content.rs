//! Content and part types shared by requests and responses.

use serde::{Deserialize, Serialize};

/// A single turn of content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".into()),
            parts: vec![Part::text(text)],
        }
    }

    /// Concatenated text of all non-thought parts.
    pub fn text(&self) -> Option<String> {
        let mut texts = self
            .parts
            .iter()
            .filter(|p| !p.is_thought())
            .filter_map(|p| p.text.as_deref())
            .peekable();

        texts.peek()?;
        Some(texts.collect())
    }

    pub fn inline_data(&self) -> Option<&InlineData> {
        self.parts.iter().find_map(|p| p.inline_data.as_ref())
    }
}

/// One part of a [`Content`]. Unknown part kinds deserialize with every field empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
            ..Default::default()
        }
    }

    pub fn is_thought(&self) -> bool {
        self.thought.unwrap_or(false)
    }
}

/// Base64-encoded binary payload with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_skips_thoughts_and_concatenates() {
        let content: Content = serde_json::from_value(json!({
            "role": "model",
            "parts": [
                {"text": "thinking...", "thought": true},
                {"text": "[{\"name\":"},
                {"text": "\"x\"}]"}
            ]
        }))
        .unwrap();

        assert_eq!(content.text().as_deref(), Some("[{\"name\":\"x\"}]"));
    }

    #[test]
    fn test_text_absent_without_text_parts() {
        let content = Content {
            role: Some("model".into()),
            parts: vec![Part::inline("image/png", "AAAA")],
        };
        assert!(content.text().is_none());
        assert_eq!(content.inline_data().unwrap().mime_type, "image/png");
    }

    #[test]
    fn test_unknown_parts_tolerated() {
        let content: Content = serde_json::from_value(json!({
            "parts": [{"functionCall": {"name": "f", "args": {}}}]
        }))
        .unwrap();
        assert_eq!(content.parts.len(), 1);
        assert!(content.text().is_none());
    }
}
