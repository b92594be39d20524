//! Key-value store trait.

use super::ConfigResult;

/// String-valued key-value store.
#[async_trait::async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>>;

    async fn set_raw(&self, key: &str, value: &str) -> ConfigResult<()>;

    /// Returns whether the key existed.
    async fn delete(&self, key: &str) -> ConfigResult<bool>;

    /// Remove every stored value.
    async fn clear(&self) -> ConfigResult<()>;

    async fn list_keys(&self, prefix: &str) -> ConfigResult<Vec<String>>;
}

/// Fail-soft parsed access on top of the raw string values.
pub trait ConfigProviderExt: ConfigProvider {
    /// Parse the raw value with `FromStr`, yielding `None` when the key is
    /// absent, unreadable, or does not parse.
    fn get_parsed<T: std::str::FromStr + Send>(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Option<T>> + Send
    where
        Self: Sync,
    {
        async move {
            match self.get_raw(key).await {
                Ok(Some(raw)) => raw.trim().parse().ok(),
                Ok(None) => None,
                Err(e) => {
                    tracing::warn!(provider = self.name(), key, error = %e, "Failed to read value");
                    None
                }
            }
        }
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProviderExt for P {}
