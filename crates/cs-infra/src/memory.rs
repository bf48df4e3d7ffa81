use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{bail, Result};
use async_trait::async_trait;
use cs_core::KeyValueStorePort;
use serde_json::Value;
use tokio::sync::Mutex;

/// In-memory key-value store.
///
/// Backs ephemeral sessions and tests. The failure switch makes every
/// subsequent `get`/`set` reject, which is how integration tests exercise
/// the organizer's sentinel paths.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<HashMap<String, Value>>,
    failing: AtomicBool,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle simulated store unavailability.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            bail!("memory store unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        self.check_available()?;
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.check_available()?;
        self.values.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = MemoryKeyValueStore::new();
        store.set("k", json!([1, 2, 3])).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!([1, 2, 3])));
    }

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn failure_switch_rejects_both_operations() {
        let store = MemoryKeyValueStore::new();
        store.set("k", json!(1)).await.unwrap();

        store.set_failing(true);
        assert!(store.get("k").await.is_err());
        assert!(store.set("k", json!(2)).await.is_err());

        store.set_failing(false);
        assert_eq!(store.get("k").await.unwrap(), Some(json!(1)));
    }
}
