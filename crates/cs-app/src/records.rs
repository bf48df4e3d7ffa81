//! Typed access to the two persisted records.
//!
//! Both records are read and written wholesale under fixed keys. Payloads
//! are validated on read; a value with an unexpected shape is treated as
//! absent rather than failing the operation.

use anyhow::{Context, Result};
use cs_core::{Category, ClipboardItem, KeyValueStorePort};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Record key for the ordered clipboard item sequence.
pub const HISTORY_KEY: &str = "clipboardHistory";

/// Record key for the ordered category sequence.
pub const CATEGORIES_KEY: &str = "categories";

pub async fn read_items(store: &dyn KeyValueStorePort) -> Result<Option<Vec<ClipboardItem>>> {
    read_record(store, HISTORY_KEY).await
}

pub async fn write_items(store: &dyn KeyValueStorePort, items: &[ClipboardItem]) -> Result<()> {
    write_record(store, HISTORY_KEY, items).await
}

pub async fn read_categories(store: &dyn KeyValueStorePort) -> Result<Option<Vec<Category>>> {
    read_record(store, CATEGORIES_KEY).await
}

pub async fn write_categories(store: &dyn KeyValueStorePort, categories: &[Category]) -> Result<()> {
    write_record(store, CATEGORIES_KEY, categories).await
}

async fn read_record<T: DeserializeOwned>(
    store: &dyn KeyValueStorePort,
    key: &str,
) -> Result<Option<Vec<T>>> {
    let Some(value) = store
        .get(key)
        .await
        .with_context(|| format!("read record {key} failed"))?
    else {
        return Ok(None);
    };

    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            warn!(key, error = %err, "persisted record has unexpected shape, treating as absent");
            Ok(None)
        }
    }
}

async fn write_record<T: Serialize>(
    store: &dyn KeyValueStorePort,
    key: &str,
    record: &[T],
) -> Result<()> {
    let value =
        serde_json::to_value(record).with_context(|| format!("serialize record {key} failed"))?;
    store
        .set(key, value)
        .await
        .with_context(|| format!("write record {key} failed"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use cs_core::ItemId;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeStore {
        values: Mutex<HashMap<String, Value>>,
    }

    #[async_trait::async_trait]
    impl KeyValueStorePort for FakeStore {
        async fn get(&self, key: &str) -> Result<Option<Value>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: Value) -> Result<()> {
            self.values.lock().unwrap().insert(key.to_string(), value);
            Ok(())
        }
    }

    #[tokio::test]
    async fn absent_record_reads_as_none() {
        let store = FakeStore::default();
        assert!(read_items(&store).await.unwrap().is_none());
        assert!(read_categories(&store).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_record_reads_as_none() {
        let store = FakeStore::default();
        store
            .set(HISTORY_KEY, json!({"not": "a sequence"}))
            .await
            .unwrap();

        assert!(read_items(&store).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn written_items_read_back_in_order() {
        let store = FakeStore::default();
        let items = vec![
            ClipboardItem::new(ItemId::from_str("a"), 1_000, "first"),
            ClipboardItem::new(ItemId::from_str("b"), 2_000, "second"),
        ];

        write_items(&store, &items).await.unwrap();
        assert_eq!(read_items(&store).await.unwrap(), Some(items));
    }
}
