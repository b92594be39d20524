//! Persisted logo cache.

use std::sync::Arc;

use super::{LogoGenerator, LogoImage};
use crate::config::ConfigProvider;

/// Store key holding the logo as a data URI.
pub const LOGO_KEY: &str = "neuria_generated_logo";

/// Generates the logo once and serves it from the store afterwards.
pub struct LogoCache {
    store: Arc<dyn ConfigProvider>,
    generator: Arc<dyn LogoGenerator>,
}

impl LogoCache {
    pub fn new(store: Arc<dyn ConfigProvider>, generator: Arc<dyn LogoGenerator>) -> Self {
        Self { store, generator }
    }

    /// The stored logo, if present and well-formed.
    pub async fn cached(&self) -> Option<LogoImage> {
        match self.store.get_raw(LOGO_KEY).await {
            Ok(Some(uri)) => match LogoImage::from_data_uri(&uri) {
                Ok(image) => Some(image),
                Err(e) => {
                    tracing::debug!(error = %e, "Ignoring malformed cached logo");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(store = self.store.name(), error = %e, "Failed to read cached logo");
                None
            }
        }
    }

    pub async fn get_or_generate(&self) -> Option<LogoImage> {
        if let Some(image) = self.cached().await {
            return Some(image);
        }
        self.generate_and_store().await
    }

    /// Regenerate regardless of the cache. A failed generation keeps the
    /// previous logo.
    pub async fn refresh(&self) -> Option<LogoImage> {
        match self.generate_and_store().await {
            Some(image) => Some(image),
            None => self.cached().await,
        }
    }

    async fn generate_and_store(&self) -> Option<LogoImage> {
        let image = self.generator.generate_logo().await?;
        if let Err(e) = self.store.set_raw(LOGO_KEY, &image.to_data_uri()).await {
            tracing::warn!(store = self.store.name(), error = %e, "Failed to persist logo");
        }
        Some(image)
    }
}
