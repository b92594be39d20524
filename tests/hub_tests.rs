//! Hub state tests with fake capabilities.
//!
//! Run: cargo test --test hub_tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use neuria::{
    Catalog, CatalogView, Category, CategorySelection, DiscoveredTool, Discoverer, DiscoveryResult,
    GroundingSource, Hub, PriceSelection, PricingTier, ToolRecord,
};
use tokio::sync::Notify;

fn tool(name: &str) -> DiscoveredTool {
    DiscoveredTool {
        name: name.into(),
        description: format!("{} description", name),
        url: format!("https://{}.example", name),
        category: "Video".into(),
        pricing_note: "Freemium".into(),
    }
}

/// Answers with one tool named after the query. The query "slow" blocks
/// until released.
#[derive(Default)]
struct FakeDiscoverer {
    calls: Mutex<Vec<(String, CategorySelection)>>,
    started: Notify,
    release: Notify,
}

#[async_trait]
impl Discoverer for FakeDiscoverer {
    async fn discover(&self, query: &str, category: CategorySelection) -> DiscoveryResult {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), category));

        if query == "slow" {
            self.started.notify_one();
            self.release.notified().await;
        }

        DiscoveryResult {
            tools: vec![tool(query)],
            sources: vec![GroundingSource {
                title: format!("About {}", query),
                url: format!("https://news.example/{}", query),
            }],
        }
    }
}

fn small_catalog() -> Arc<Catalog> {
    Arc::new(
        Catalog::new(vec![
            ToolRecord::new("a", "ChatGPT", Category::Text, PricingTier::Freemium)
                .description("Conversational assistant"),
            ToolRecord::new("b", "Leonardo", Category::Image, PricingTier::Freemium)
                .description("Image generation with style control"),
            ToolRecord::new("c", "Midjourney", Category::Image, PricingTier::Paid)
                .description("Artistic image generation"),
        ])
        .unwrap(),
    )
}

#[tokio::test]
async fn test_discover_uses_current_selections() {
    let fake = Arc::new(FakeDiscoverer::default());
    let hub = Hub::new(small_catalog(), fake.clone());

    hub.set_search("music").await;
    hub.set_category(Category::Audio.into()).await;
    assert!(hub.discover().await);

    let calls = fake.calls.lock().unwrap().clone();
    assert_eq!(calls, vec![("music".to_string(), Category::Audio.into())]);

    let state = hub.state().await;
    assert!(!state.is_discovering());
    assert_eq!(state.discovered()[0].name, "music");
    assert_eq!(state.sources().len(), 1);
}

#[tokio::test]
async fn test_stale_result_does_not_overwrite_newer_one() {
    let fake = Arc::new(FakeDiscoverer::default());
    let hub = Arc::new(Hub::new(small_catalog(), fake.clone()));

    hub.set_search("slow").await;
    let slow = {
        let hub = hub.clone();
        tokio::spawn(async move { hub.discover().await })
    };
    fake.started.notified().await;

    hub.set_search("fast").await;
    assert!(hub.discover().await);
    assert_eq!(hub.state().await.discovered()[0].name, "fast");

    fake.release.notify_one();
    assert!(!slow.await.unwrap());

    let state = hub.state().await;
    assert_eq!(state.discovered()[0].name, "fast");
    assert_eq!(state.sources()[0].url, "https://news.example/fast");
}

#[tokio::test]
async fn test_dismiss_clears_results() {
    let fake = Arc::new(FakeDiscoverer::default());
    let hub = Hub::new(small_catalog(), fake);

    hub.discover().await;
    assert!(!hub.state().await.discovered().is_empty());

    hub.dismiss_discovery().await;
    let state = hub.state().await;
    assert!(state.discovered().is_empty());
    assert!(state.sources().is_empty());
}

#[tokio::test]
async fn test_view_follows_filters() {
    let hub = Hub::new(small_catalog(), Arc::new(FakeDiscoverer::default()));

    match hub.view().await {
        CatalogView::Grouped(groups) => {
            assert_eq!(groups.len(), 2);
            assert_eq!(groups[1].category, Category::Image);
            assert_eq!(groups[1].tools.len(), 2);
        }
        CatalogView::Flat(_) => panic!("expected grouped view"),
    }

    hub.set_price(PriceSelection::Only(PricingTier::Paid)).await;
    let view = hub.view().await;
    assert!(view.is_grouped());
    assert_eq!(view.len(), 1);

    hub.set_price(PriceSelection::All).await;
    hub.set_search("IMAGE").await;
    let view = hub.view().await;
    assert!(!view.is_grouped());
    let ids: Vec<&str> = view.tools().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c"]);
}

#[tokio::test]
async fn test_builtin_hub_groups_catalog() {
    let hub = Hub::with_builtin(Arc::new(FakeDiscoverer::default()));
    let view = hub.view().await;
    assert_eq!(view.len(), Catalog::builtin().len());
    assert!(view.is_grouped());
}
