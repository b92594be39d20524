//! Catalog filtering and category grouping.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{Catalog, Category, PricingTier, ToolRecord};
use crate::{Error, Result};

const ALL_SENTINEL: &str = "all";

/// Category filter: a specific category or every category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    #[default]
    All,
    Only(Category),
}

impl CategorySelection {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::Only(c) => Some(*c),
        }
    }
}

impl From<Category> for CategorySelection {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl FromStr for CategorySelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(ALL_SENTINEL) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(c) => write!(f, "{}", c),
        }
    }
}

/// Pricing filter: a specific tier or every tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PriceSelection {
    #[default]
    All,
    Only(PricingTier),
}

impl PriceSelection {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn matches(&self, tier: PricingTier) -> bool {
        match self {
            Self::All => true,
            Self::Only(t) => *t == tier,
        }
    }
}

impl From<PricingTier> for PriceSelection {
    fn from(tier: PricingTier) -> Self {
        Self::Only(tier)
    }
}

impl FromStr for PriceSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(ALL_SENTINEL) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl fmt::Display for PriceSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(t) => write!(f, "{}", t),
        }
    }
}

/// Tools of one category, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub tools: Vec<&'a ToolRecord>,
}

/// Presentation shape of a filter result.
///
/// `Grouped` is only produced when there is no search term and no category
/// filter; the set of tools is the same as the flat list either way.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "items", rename_all = "lowercase")]
pub enum CatalogView<'a> {
    Flat(Vec<&'a ToolRecord>),
    Grouped(Vec<CategoryGroup<'a>>),
}

impl<'a> CatalogView<'a> {
    pub fn is_grouped(&self) -> bool {
        matches!(self, Self::Grouped(_))
    }

    /// All tools of the view, in presentation order.
    pub fn tools(&self) -> Vec<&'a ToolRecord> {
        match self {
            Self::Flat(tools) => tools.clone(),
            Self::Grouped(groups) => groups
                .iter()
                .flat_map(|g| g.tools.iter().copied())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Flat(tools) => tools.len(),
            Self::Grouped(groups) => groups.iter().map(|g| g.tools.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Matching predicate over catalog records.
#[derive(Clone, Debug, Default)]
pub struct CatalogFilter {
    search: String,
    needle: String,
    category: CategorySelection,
    price: PriceSelection,
}

impl CatalogFilter {
    pub fn new(
        search: impl Into<String>,
        category: CategorySelection,
        price: PriceSelection,
    ) -> Self {
        let search = search.into();
        let needle = search.to_lowercase();
        Self {
            search,
            needle,
            category,
            price,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> CategorySelection {
        self.category
    }

    pub fn price(&self) -> PriceSelection {
        self.price
    }

    pub fn matches(&self, tool: &ToolRecord) -> bool {
        let text = self.needle.is_empty()
            || tool.name.to_lowercase().contains(&self.needle)
            || tool.description.to_lowercase().contains(&self.needle);

        text && self.category.matches(tool.category) && self.price.matches(tool.pricing_tier)
    }

    /// Matching records, preserving catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ToolRecord> {
        catalog.iter().filter(|t| self.matches(t)).collect()
    }

    /// Grouping applies only without a search term and category filter.
    /// The price filter does not affect the mode.
    pub fn groups_by_category(&self) -> bool {
        self.search.is_empty() && self.category.is_all()
    }

    pub fn view<'a>(&self, catalog: &'a Catalog) -> CatalogView<'a> {
        let tools = self.apply(catalog);
        if self.groups_by_category() {
            CatalogView::Grouped(group_by_category(&tools))
        } else {
            CatalogView::Flat(tools)
        }
    }
}

/// Stable filter of `catalog` by search term, category and pricing tier.
pub fn filter<'a>(
    catalog: &'a Catalog,
    search: &str,
    category: CategorySelection,
    price: PriceSelection,
) -> Vec<&'a ToolRecord> {
    CatalogFilter::new(search, category, price).apply(catalog)
}

/// Partition tools by category in enumeration order, omitting empty categories.
pub fn group_by_category<'a>(tools: &[&'a ToolRecord]) -> Vec<CategoryGroup<'a>> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let in_category: Vec<&ToolRecord> = tools
                .iter()
                .copied()
                .filter(|t| t.category == category)
                .collect();
            (!in_category.is_empty()).then_some(CategoryGroup {
                category,
                tools: in_category,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            ToolRecord::new("a", "ChatGPT", Category::Text, PricingTier::Freemium)
                .description("Conversational assistant"),
            ToolRecord::new("b", "Leonardo", Category::Image, PricingTier::Freemium)
                .description("Image generation with style control"),
        ])
        .unwrap()
    }

    fn ids(tools: &[&ToolRecord]) -> Vec<String> {
        tools.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = sample();
        let result = filter(&catalog, "chat", CategorySelection::All, PriceSelection::All);
        assert_eq!(ids(&result), vec!["a"]);

        let result = filter(&catalog, "STYLE", CategorySelection::All, PriceSelection::All);
        assert_eq!(ids(&result), vec!["b"]);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let catalog = sample();
        let result = filter(&catalog, "", CategorySelection::All, PriceSelection::All);
        assert_eq!(result.len(), catalog.len());
    }

    #[test]
    fn test_price_filter_without_matches() {
        let catalog = sample();
        let result = filter(
            &catalog,
            "",
            CategorySelection::All,
            PricingTier::Paid.into(),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_grouped_view_when_no_search_and_all_categories() {
        let catalog = sample();
        let view =
            CatalogFilter::new("", CategorySelection::All, PriceSelection::All).view(&catalog);

        match view {
            CatalogView::Grouped(groups) => {
                assert_eq!(groups.len(), 2);
                assert_eq!(groups[0].category, Category::Text);
                assert_eq!(ids(&groups[0].tools), vec!["a"]);
                assert_eq!(groups[1].category, Category::Image);
                assert_eq!(ids(&groups[1].tools), vec!["b"]);
            }
            CatalogView::Flat(_) => panic!("expected grouped view"),
        }
    }

    #[test]
    fn test_flat_view_with_search_or_category() {
        let catalog = sample();

        let view =
            CatalogFilter::new("leo", CategorySelection::All, PriceSelection::All).view(&catalog);
        assert!(!view.is_grouped());

        let view =
            CatalogFilter::new("", Category::Text.into(), PriceSelection::All).view(&catalog);
        assert!(!view.is_grouped());
        assert_eq!(ids(&view.tools()), vec!["a"]);
    }

    #[test]
    fn test_price_filter_keeps_grouping() {
        let catalog = sample();
        let view = CatalogFilter::new("", CategorySelection::All, PricingTier::Freemium.into())
            .view(&catalog);
        assert!(view.is_grouped());
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_grouping_follows_enumeration_order() {
        let catalog = Catalog::new(vec![
            ToolRecord::new("v", "Video tool", Category::Video, PricingTier::Free),
            ToolRecord::new("a1", "Audio one", Category::Audio, PricingTier::Free),
            ToolRecord::new("t", "Text tool", Category::Text, PricingTier::Free),
            ToolRecord::new("a2", "Audio two", Category::Audio, PricingTier::Free),
        ])
        .unwrap();

        let tools = catalog.iter().collect::<Vec<_>>();
        let groups = group_by_category(&tools);
        let order: Vec<Category> = groups.iter().map(|g| g.category).collect();
        assert_eq!(order, vec![Category::Text, Category::Audio, Category::Video]);
        assert_eq!(ids(&groups[1].tools), vec!["a1", "a2"]);
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!(
            "All".parse::<CategorySelection>().unwrap(),
            CategorySelection::All
        );
        assert_eq!(
            "research".parse::<CategorySelection>().unwrap(),
            CategorySelection::Only(Category::Research)
        );
        assert_eq!(
            "paid".parse::<PriceSelection>().unwrap(),
            PriceSelection::Only(PricingTier::Paid)
        );
        assert!("weekly".parse::<PriceSelection>().is_err());
    }
}
