use anyhow::Result;
use serde_json::Value;

/// Shared asynchronous key-value store holding the persisted records.
///
/// The transport behind this port (browser storage, file, remote service)
/// is an external collaborator. It offers no transactions and no atomic
/// multi-key update; records are read and written wholesale, one key per
/// call. Suspension points of the core are exactly these two methods.
#[async_trait::async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Read the value stored under `key`, or `None` if nothing is persisted.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: Value) -> Result<()>;
}
