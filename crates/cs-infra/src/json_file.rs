use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use cs_core::KeyValueStorePort;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::debug;

/// Key-value store persisted as a single JSON object document.
///
/// Every record lives under its key in one document. Writes rewrite the
/// whole document through a temp file and rename, so the file on disk is
/// always either the previous document or the fully written new one.
pub struct JsonFileKeyValueStore {
    path: PathBuf,
}

impl JsonFileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default document location under the platform data directory.
    pub fn default_path(app_name: &str) -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join(app_name).join("history.json"))
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create store dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn read_document(&self) -> Result<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Map::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read store document failed: {}", self.path.display()))
            }
        };

        serde_json::from_str(&content)
            .with_context(|| format!("parse store document failed: {}", self.path.display()))
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp store document failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp store document to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for JsonFileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read_document().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut document = self.read_document().await?;
        document.insert(key.to_string(), value);

        let content = serde_json::to_string_pretty(&Value::Object(document))
            .context("serialize store document failed")?;
        self.atomic_write(&content).await?;

        debug!(key, path = %self.path.display(), "persisted store document");
        Ok(())
    }
}
