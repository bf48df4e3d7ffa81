//! Clipboard item store.
//!
//! Owns the ordered item collection. Items are captured elsewhere; the
//! only mutation here is the retroactive category reassignment.

use std::sync::Arc;

use anyhow::Result;
use cs_core::{ClipboardItem, ItemId, KeyValueStorePort};
use tracing::{debug, info};

use crate::records;
use crate::registry::CategoryRegistry;
use crate::state::SharedState;

#[derive(Clone)]
pub struct ClipboardItemStore {
    store: Arc<dyn KeyValueStorePort>,
    registry: CategoryRegistry,
    state: SharedState,
}

impl ClipboardItemStore {
    pub fn new(
        store: Arc<dyn KeyValueStorePort>,
        registry: CategoryRegistry,
        state: SharedState,
    ) -> Self {
        Self {
            store,
            registry,
            state,
        }
    }

    /// Read the full persisted item collection and refresh the mirror.
    ///
    /// An absent record yields an empty collection, not an error.
    pub async fn hydrate(&self) -> Result<Vec<ClipboardItem>> {
        let mut state = self.state.lock().await;
        let items = records::read_items(self.store.as_ref())
            .await?
            .unwrap_or_default();
        state.items = items.clone();
        debug!(count = items.len(), "hydrated clipboard history");
        Ok(items)
    }

    /// Assign `category_name` to the item with `item_id`.
    ///
    /// The name resolves through the registry's get-or-create path, so an
    /// unknown name mints a new category first. Every matching item is
    /// rewritten with a by-value copy of the category, the full rewritten
    /// collection is persisted in a single write, mirrored, and returned.
    ///
    /// An unmatched id is a silent no-op: the unchanged collection is
    /// still persisted and returned. The category write and the item
    /// write are separate store writes; a failure between them can leave
    /// an orphan category, which is accepted.
    pub async fn assign_category(
        &self,
        item_id: &ItemId,
        category_name: &str,
    ) -> Result<Vec<ClipboardItem>> {
        let category = self.registry.ensure_category(category_name).await?;

        let mut state = self.state.lock().await;
        let items = records::read_items(self.store.as_ref())
            .await?
            .unwrap_or_default();
        let rewritten: Vec<ClipboardItem> = items
            .into_iter()
            .map(|mut item| {
                if item.id == *item_id {
                    item.category = Some(category.clone());
                }
                item
            })
            .collect();

        records::write_items(self.store.as_ref(), &rewritten).await?;
        state.items = rewritten.clone();

        info!(item_id = %item_id, category = %category.name, "assigned category");
        Ok(rewritten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::shared_state;
    use serde_json::Value;
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

    fn item_store() -> (ClipboardItemStore, Arc<FakeStore>) {
        let store = Arc::new(FakeStore::default());
        let state = shared_state();
        let registry = CategoryRegistry::new(store.clone(), state.clone());
        let items = ClipboardItemStore::new(store.clone(), registry, state);
        (items, store)
    }

    fn captured(id: &str, timestamp_ms: i64) -> ClipboardItem {
        ClipboardItem::new(ItemId::from_str(id), timestamp_ms, format!("clip {id}"))
    }

    #[tokio::test]
    async fn hydrate_on_empty_store_yields_empty_collection() {
        let (items, _store) = item_store();
        assert!(items.hydrate().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn assign_to_unknown_name_creates_exactly_one_category() {
        let (items, store) = item_store();
        records::write_items(store.as_ref(), &[captured("a", 1_000)])
            .await
            .unwrap();

        let updated = items.assign_category(&ItemId::from_str("a"), "Snippets").await.unwrap();

        let categories = records::read_categories(store.as_ref())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(updated[0].category, Some(categories[0].clone()));
    }

    #[tokio::test]
    async fn assign_reuses_existing_category_under_normalization() {
        let (items, store) = item_store();
        let notes = cs_core::Category::new("Notes").unwrap();
        records::write_categories(store.as_ref(), &[notes.clone()])
            .await
            .unwrap();
        records::write_items(store.as_ref(), &[captured("a", 1_000)])
            .await
            .unwrap();

        let updated = items.assign_category(&ItemId::from_str("a"), "notes").await.unwrap();

        let categories = records::read_categories(store.as_ref())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(categories.len(), 1, "no new category should be created");
        assert_eq!(updated[0].category.as_ref().unwrap().id, notes.id);
    }

    #[tokio::test]
    async fn assign_with_unmatched_id_persists_unchanged_collection() {
        let (items, store) = item_store();
        let existing = vec![captured("a", 1_000), captured("b", 2_000)];
        records::write_items(store.as_ref(), &existing).await.unwrap();

        let updated = items
            .assign_category(&ItemId::from_str("missing"), "Notes")
            .await
            .unwrap();

        assert_eq!(updated, existing);
        let persisted = records::read_items(store.as_ref()).await.unwrap().unwrap();
        assert_eq!(persisted, existing);
    }

    #[tokio::test]
    async fn assign_updates_the_in_memory_mirror() {
        let (items, store) = item_store();
        records::write_items(store.as_ref(), &[captured("a", 1_000)])
            .await
            .unwrap();

        let updated = items.assign_category(&ItemId::from_str("a"), "Work").await.unwrap();

        let state = items.state.lock().await;
        assert_eq!(state.items, updated);
        assert_eq!(state.categories.len(), 1);
    }
}
