//! Transient hub state: filter selections and the current discovery.

use crate::catalog::{Catalog, CatalogFilter, CatalogView, CategorySelection, PriceSelection};
use crate::discovery::{DiscoveredTool, DiscoveryResult, GroundingSource};

/// Identifies one discovery call. Only the most recent ticket may apply
/// its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscoveryTicket(u64);

impl DiscoveryTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for DiscoveryTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct HubState {
    pub search: String,
    pub category: CategorySelection,
    pub price: PriceSelection,
    discovered: Vec<DiscoveredTool>,
    sources: Vec<GroundingSource>,
    discovering: bool,
    issued: u64,
    pending: Option<DiscoveryTicket>,
}

impl HubState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn discovered(&self) -> &[DiscoveredTool] {
        &self.discovered
    }

    pub fn sources(&self) -> &[GroundingSource] {
        &self.sources
    }

    pub fn is_discovering(&self) -> bool {
        self.discovering
    }

    /// Issue a new ticket, superseding any call still in flight. Sources of
    /// the previous result are cleared right away, tools stay until replaced.
    pub fn begin_discovery(&mut self) -> DiscoveryTicket {
        self.issued += 1;
        let ticket = DiscoveryTicket(self.issued);
        self.pending = Some(ticket);
        self.discovering = true;
        self.sources.clear();
        ticket
    }

    /// Returns false and leaves the state untouched when `ticket` is stale.
    pub fn finish_discovery(&mut self, ticket: DiscoveryTicket, result: DiscoveryResult) -> bool {
        if self.pending != Some(ticket) {
            tracing::debug!(%ticket, latest = ?self.pending, "Discarding stale discovery result");
            return false;
        }

        self.pending = None;
        self.discovering = false;
        self.discovered = result.tools;
        self.sources = result.sources;
        true
    }

    /// Clear the discovery section. A call still in flight is abandoned.
    pub fn dismiss_discovery(&mut self) {
        self.pending = None;
        self.discovering = false;
        self.discovered.clear();
        self.sources.clear();
    }

    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter::new(self.search.clone(), self.category, self.price)
    }

    pub fn view<'a>(&self, catalog: &'a Catalog) -> CatalogView<'a> {
        self.filter().view(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn result(name: &str) -> DiscoveryResult {
        DiscoveryResult {
            tools: vec![DiscoveredTool {
                name: name.into(),
                description: String::new(),
                url: format!("https://{}.example", name),
                category: "Video".into(),
                pricing_note: "Free".into(),
            }],
            sources: vec![GroundingSource {
                title: name.into(),
                url: format!("https://{}.example/src", name),
            }],
        }
    }

    #[test]
    fn test_tickets_increase() {
        let mut state = HubState::new();
        let first = state.begin_discovery();
        let second = state.begin_discovery();
        assert!(second > first);
    }

    #[test]
    fn test_latest_ticket_applies() {
        let mut state = HubState::new();
        let ticket = state.begin_discovery();
        assert!(state.is_discovering());

        assert!(state.finish_discovery(ticket, result("runway")));
        assert!(!state.is_discovering());
        assert_eq!(state.discovered()[0].name, "runway");
        assert_eq!(state.sources().len(), 1);
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut state = HubState::new();
        let slow = state.begin_discovery();
        let fast = state.begin_discovery();

        assert!(state.finish_discovery(fast, result("fast")));
        assert!(!state.finish_discovery(slow, result("slow")));
        assert_eq!(state.discovered()[0].name, "fast");
    }

    #[test]
    fn test_begin_clears_sources_only() {
        let mut state = HubState::new();
        let ticket = state.begin_discovery();
        state.finish_discovery(ticket, result("a"));

        state.begin_discovery();
        assert!(state.sources().is_empty());
        assert_eq!(state.discovered().len(), 1);
    }

    #[test]
    fn test_dismiss_abandons_in_flight_call() {
        let mut state = HubState::new();
        let ticket = state.begin_discovery();
        state.dismiss_discovery();

        assert!(!state.finish_discovery(ticket, result("late")));
        assert!(state.discovered().is_empty());
        assert!(!state.is_discovering());
    }

    #[test]
    fn test_view_uses_selections() {
        let catalog = Catalog::builtin();
        let mut state = HubState::new();
        assert!(state.view(catalog).is_grouped());

        state.category = Category::Coding.into();
        let view = state.view(catalog);
        assert!(!view.is_grouped());
        assert!(view.tools().iter().all(|t| t.category == Category::Coding));
    }
}
