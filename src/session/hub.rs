//! Ties the catalog, the hub state and a discoverer together.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::state::HubState;
use crate::catalog::{Catalog, CatalogView, CategorySelection, PriceSelection};
use crate::discovery::{Discoverer, DiscoveryResult};

pub struct Hub {
    catalog: Arc<Catalog>,
    discoverer: Arc<dyn Discoverer>,
    state: RwLock<HubState>,
}

impl Hub {
    pub fn new(catalog: Arc<Catalog>, discoverer: Arc<dyn Discoverer>) -> Self {
        Self {
            catalog,
            discoverer,
            state: RwLock::new(HubState::new()),
        }
    }

    /// Hub over the built-in catalog.
    pub fn with_builtin(discoverer: Arc<dyn Discoverer>) -> Self {
        Self::new(Arc::new(Catalog::builtin().clone()), discoverer)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn set_search(&self, search: impl Into<String>) {
        self.state.write().await.search = search.into();
    }

    pub async fn set_category(&self, category: CategorySelection) {
        self.state.write().await.category = category;
    }

    pub async fn set_price(&self, price: PriceSelection) {
        self.state.write().await.price = price;
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> HubState {
        self.state.read().await.clone()
    }

    pub async fn view(&self) -> CatalogView<'_> {
        let filter = self.state.read().await.filter();
        filter.view(&self.catalog)
    }

    /// Run discovery for the current search term and category. Returns
    /// whether the result was applied; a newer call started meanwhile wins.
    pub async fn discover(&self) -> bool {
        let (ticket, query, category) = {
            let mut state = self.state.write().await;
            let ticket = state.begin_discovery();
            (ticket, state.search.clone(), state.category)
        };

        tracing::debug!(%ticket, query = %query, %category, "Starting discovery");
        let result = self.discoverer.discover(&query, category).await;
        self.apply(ticket, result).await
    }

    async fn apply(&self, ticket: super::DiscoveryTicket, result: DiscoveryResult) -> bool {
        self.state.write().await.finish_discovery(ticket, result)
    }

    pub async fn dismiss_discovery(&self) {
        self.state.write().await.dismiss_discovery();
    }
}

impl std::fmt::Debug for Hub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hub")
            .field("tools", &self.catalog.len())
            .finish_non_exhaustive()
    }
}
