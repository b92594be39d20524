//! JSON file-backed key-value store.
//!
//! The file holds a flat object of string values. It is created on the
//! first write and rewritten through a temporary file on every change.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use super::ConfigResult;
use super::provider::ConfigProvider;

pub struct FileConfigProvider {
    path: PathBuf,
    data: Arc<RwLock<Option<BTreeMap<String, String>>>>,
}

impl FileConfigProvider {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: Arc::new(RwLock::new(None)),
        }
    }

    /// Non-string JSON values are kept in their JSON text form. A file that is
    /// not a JSON object reads as empty and is replaced on the next write.
    async fn load(&self) -> ConfigResult<BTreeMap<String, String>> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(BTreeMap::new());
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let raw: BTreeMap<String, serde_json::Value> = match serde_json::from_str(&content) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Discarding unreadable state file"
                );
                return Ok(BTreeMap::new());
            }
        };
        Ok(raw
            .into_iter()
            .map(|(k, v)| match v {
                serde_json::Value::String(s) => (k, s),
                other => (k, other.to_string()),
            })
            .collect())
    }

    async fn save(&self, data: &BTreeMap<String, String>) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(data)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn with_data<R>(
        &self,
        f: impl FnOnce(&mut BTreeMap<String, String>) -> (R, bool),
    ) -> ConfigResult<R> {
        let mut guard = self.data.write().await;
        if guard.is_none() {
            *guard = Some(self.load().await?);
        }
        let current = guard.get_or_insert_with(BTreeMap::new);

        let mut next = current.clone();
        let (result, changed) = f(&mut next);
        if changed {
            self.save(&next).await?;
            *current = next;
        }
        Ok(result)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ConfigProvider for FileConfigProvider {
    fn name(&self) -> &str {
        "file"
    }

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        self.with_data(|map| (map.get(key).cloned(), false)).await
    }

    async fn set_raw(&self, key: &str, value: &str) -> ConfigResult<()> {
        self.with_data(|map| {
            let changed = map.get(key).map(String::as_str) != Some(value);
            map.insert(key.to_string(), value.to_string());
            ((), changed)
        })
        .await
    }

    async fn delete(&self, key: &str) -> ConfigResult<bool> {
        self.with_data(|map| {
            let existed = map.remove(key).is_some();
            (existed, existed)
        })
        .await
    }

    async fn clear(&self) -> ConfigResult<()> {
        self.with_data(|map| {
            let changed = !map.is_empty();
            map.clear();
            ((), changed)
        })
        .await
    }

    async fn list_keys(&self, prefix: &str) -> ConfigResult<Vec<String>> {
        self.with_data(|map| {
            let keys = map
                .keys()
                .filter(|k| k.starts_with(prefix))
                .cloned()
                .collect();
            (keys, false)
        })
        .await
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_provider_reads_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");

        let state = serde_json::json!({
            "ai_hub_user": "ana@example.com",
            "ai_hub_reg_date": 1700000000000i64,
            "ai_hub_is_paid": "true"
        });
        tokio::fs::write(&path, state.to_string()).await.unwrap();

        let provider = FileConfigProvider::new(path);
        assert_eq!(
            provider.get_raw("ai_hub_user").await.unwrap().as_deref(),
            Some("ana@example.com")
        );
        assert_eq!(
            provider.get_raw("ai_hub_reg_date").await.unwrap().as_deref(),
            Some("1700000000000")
        );
    }

    #[tokio::test]
    async fn test_file_provider_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let provider = FileConfigProvider::new(temp_dir.path().join("missing.json"));

        assert_eq!(provider.get_raw("key").await.unwrap(), None);
        assert!(!temp_dir.path().join("missing.json").exists());
    }

    #[tokio::test]
    async fn test_file_provider_write_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("state.json");

        let provider = FileConfigProvider::new(path.clone());
        provider.set_raw("ai_hub_lang", "en").await.unwrap();
        assert!(path.exists());

        let reopened = FileConfigProvider::new(path);
        assert_eq!(
            reopened.get_raw("ai_hub_lang").await.unwrap().as_deref(),
            Some("en")
        );
    }

    #[tokio::test]
    async fn test_file_provider_delete_and_clear() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        let provider = FileConfigProvider::new(path.clone());

        provider.set_raw("temp", "value").await.unwrap();
        assert!(provider.delete("temp").await.unwrap());
        assert!(!provider.delete("temp").await.unwrap());

        provider.set_raw("a", "1").await.unwrap();
        provider.set_raw("b", "2").await.unwrap();
        provider.clear().await.unwrap();
        assert!(provider.list_keys("").await.unwrap().is_empty());

        let reopened = FileConfigProvider::new(path);
        assert_eq!(reopened.get_raw("a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_provider_corrupt_file_reads_empty_and_recovers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let provider = FileConfigProvider::new(path.clone());
        assert_eq!(provider.get_raw("ai_hub_user").await.unwrap(), None);

        provider.set_raw("ai_hub_user", "a@b.c").await.unwrap();
        provider.clear().await.unwrap();
        provider.set_raw("ai_hub_lang", "en").await.unwrap();

        let reopened = FileConfigProvider::new(path);
        assert_eq!(
            reopened.get_raw("ai_hub_lang").await.unwrap().as_deref(),
            Some("en")
        );
        assert_eq!(reopened.get_raw("ai_hub_user").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_provider_non_object_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        tokio::fs::write(&path, "[1, 2, 3]").await.unwrap();

        let provider = FileConfigProvider::new(path);
        assert!(provider.list_keys("").await.unwrap().is_empty());
        provider.set_raw("ai_hub_is_paid", "true").await.unwrap();
    }

    #[tokio::test]
    async fn test_file_provider_failed_write_leaves_cache_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        tokio::fs::create_dir(path.with_extension("json.tmp"))
            .await
            .unwrap();

        let provider = FileConfigProvider::new(path);
        assert!(provider.set_raw("ai_hub_user", "a@b.c").await.is_err());
        assert_eq!(provider.get_raw("ai_hub_user").await.unwrap(), None);
    }
}
