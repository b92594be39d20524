//! Static catalog of curated AI tools.
//!
//! The catalog is seeded once and never mutated. Filtering is a stable
//! linear scan over it, see [`filter()`].

mod builtin;
pub mod filter;

pub use builtin::builtin_tools;
pub use filter::{
    CatalogFilter, CatalogView, CategoryGroup, CategorySelection, PriceSelection, filter,
    group_by_category,
};

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Display language for labels and discovery prompts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" | "spanish" | "español" => Ok(Self::Es),
            "en" | "english" => Ok(Self::En),
            other => Err(Error::InvalidRequest(format!("unknown language: {}", other))),
        }
    }
}

/// Fixed tool category enumeration. Declaration order is the display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Text,
    Image,
    Audio,
    Video,
    Coding,
    Research,
    Marketing,
    Premium,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::Text,
        Self::Image,
        Self::Audio,
        Self::Video,
        Self::Coding,
        Self::Research,
        Self::Marketing,
        Self::Premium,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Coding => "coding",
            Self::Research => "research",
            Self::Marketing => "marketing",
            Self::Premium => "premium",
        }
    }

    /// Label in the default language, also the `Display` form. Discovery
    /// prompts use [`Category::label_in`] with the prompt language.
    pub fn label(&self) -> &'static str {
        self.label_in(Language::Es)
    }

    pub fn label_in(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Text, Language::Es) => "Texto y Escritura",
            (Self::Image, Language::Es) => "Imagen y Diseño",
            (Self::Audio, Language::Es) => "Audio y Música",
            (Self::Video, Language::Es) => "Video y Animación",
            (Self::Coding, Language::Es) => "Programación",
            (Self::Research, Language::Es) => "Investigación y Productividad",
            (Self::Marketing, Language::Es) => "Marketing y SEO",
            (Self::Premium, Language::Es) => "Herramientas Premium",
            (Self::Text, Language::En) => "Text & Writing",
            (Self::Image, Language::En) => "Image & Design",
            (Self::Audio, Language::En) => "Audio & Music",
            (Self::Video, Language::En) => "Video & Animation",
            (Self::Coding, Language::En) => "Programming",
            (Self::Research, Language::En) => "Research & Productivity",
            (Self::Marketing, Language::En) => "Marketing & SEO",
            (Self::Premium, Language::En) => "Premium Tools",
        }
    }

    /// Fallback card image for records without their own.
    pub fn placeholder_image(&self) -> &'static str {
        match self {
            Self::Text => {
                "https://images.unsplash.com/photo-1455390582262-044cdead277a?auto=format&fit=crop&q=80&w=600"
            }
            Self::Image => {
                "https://images.unsplash.com/photo-1620641788421-7a1c342ea42e?auto=format&fit=crop&q=80&w=600"
            }
            Self::Audio => {
                "https://images.unsplash.com/photo-1514525253344-9914f2558a37?auto=format&fit=crop&q=80&w=600"
            }
            Self::Video => {
                "https://images.unsplash.com/photo-1536240478700-b869070f9279?auto=format&fit=crop&q=80&w=600"
            }
            Self::Coding => {
                "https://images.unsplash.com/photo-1542831371-29b0f74f9713?auto=format&fit=crop&q=80&w=600"
            }
            Self::Research => {
                "https://images.unsplash.com/photo-1507413245164-6160d8298b31?auto=format&fit=crop&q=80&w=600"
            }
            Self::Marketing => {
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=600"
            }
            Self::Premium => {
                "https://images.unsplash.com/photo-1677442136019-21780ecad995?auto=format&fit=crop&q=80&w=600"
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Accepts the variant key or either label, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.key() == needle
                    || c.label_in(Language::Es).to_lowercase() == needle
                    || c.label_in(Language::En).to_lowercase() == needle
            })
            .ok_or_else(|| Error::InvalidRequest(format!("unknown category: {}", s)))
    }
}

/// Cost model of a catalog tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingTier {
    Free,
    Freemium,
    Paid,
}

impl PricingTier {
    pub const ALL: [PricingTier; 3] = [Self::Free, Self::Freemium, Self::Paid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Freemium => "Freemium",
            Self::Paid => "Paid",
        }
    }

    pub fn has_free_option(&self) -> bool {
        matches!(self, Self::Free | Self::Freemium)
    }
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidRequest(format!("unknown pricing tier: {}", s)))
    }
}

/// A curated tool entry of the static catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub category: Category,
    pub pricing_tier: PricingTier,
    pub pricing_note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ToolRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        pricing_tier: PricingTier,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            url: String::new(),
            category,
            pricing_tier,
            pricing_note: String::new(),
            image_url: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn pricing_note(mut self, note: impl Into<String>) -> Self {
        self.pricing_note = note.into();
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn image_or_placeholder(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| self.category.placeholder_image())
    }
}

/// Read-only, ordered collection of [`ToolRecord`]s with unique identifiers.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    tools: Vec<ToolRecord>,
}

impl Catalog {
    pub fn new(tools: Vec<ToolRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tools.len());
        for tool in &tools {
            if !seen.insert(tool.id.as_str()) {
                return Err(Error::InvalidRequest(format!(
                    "duplicate tool identifier: {}",
                    tool.id
                )));
            }
        }
        Ok(Self { tools })
    }

    /// Process-wide curated catalog, seeded on first access.
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog {
            tools: builtin_tools(),
        })
    }

    pub fn tools(&self) -> &[ToolRecord] {
        &self.tools
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolRecord> {
        self.tools.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ToolRecord> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ToolRecord;
    type IntoIter = std::slice::Iter<'a, ToolRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}
