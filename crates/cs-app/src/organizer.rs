//! Organizer facade.
//!
//! The operation contract toward the presentation collaborator. This is
//! also the error boundary: every store-level failure is caught here,
//! logged, and converted to a sentinel value. Nothing propagates as an
//! unhandled failure to the presentation layer, which treats a sentinel
//! as "no-op occurred" and re-fetches the views after each callback.

use std::sync::Arc;

use cs_core::{
    group_by_category, group_by_date, Category, CategoryGroup, ClipboardItem, DateGroup, ItemId,
    KeyValueStorePort,
};
use tracing::warn;

use crate::items::ClipboardItemStore;
use crate::loader::SyncLoader;
use crate::registry::{CategoryRegistry, CreateCategoryOutcome};
use crate::state::{self, SharedState};

pub struct Organizer {
    state: SharedState,
    registry: CategoryRegistry,
    items: ClipboardItemStore,
    loader: SyncLoader,
}

impl Organizer {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        let state = state::shared_state();
        let registry = CategoryRegistry::new(store.clone(), state.clone());
        let items = ClipboardItemStore::new(store.clone(), registry.clone(), state.clone());
        let loader = SyncLoader::new(store, state.clone());
        Self {
            state,
            registry,
            items,
            loader,
        }
    }

    /// Startup hydration of both collections.
    #[tracing::instrument(name = "organizer.load", skip(self))]
    pub async fn load(&self) {
        self.loader.load().await;
    }

    /// Current by-date view, recomputed from the in-memory collections.
    pub async fn by_date(&self) -> Vec<DateGroup> {
        let state = self.state.lock().await;
        group_by_date(&state.items)
    }

    /// Current by-category view, recomputed from the in-memory collections.
    pub async fn by_category(&self) -> Vec<CategoryGroup> {
        let state = self.state.lock().await;
        group_by_category(&state.items, &state.categories)
    }

    /// Interactive category creation.
    ///
    /// Duplicates surface as [`CreateCategoryOutcome::DuplicateName`];
    /// store and validation failures are logged and collapse to
    /// [`CreateCategoryOutcome::Failed`].
    #[tracing::instrument(name = "organizer.create_category", skip(self))]
    pub async fn create_category(&self, name: &str) -> CreateCategoryOutcome {
        match self.registry.create_category(name).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "creating category failed");
                CreateCategoryOutcome::Failed
            }
        }
    }

    /// Retroactively assign a category to an item, creating the category
    /// on demand. `None` means the operation failed and was logged; no
    /// partial persisted state is possible because the rewrite is a
    /// single store write.
    #[tracing::instrument(name = "organizer.assign_category", skip(self), fields(item_id = %item_id))]
    pub async fn assign_category(
        &self,
        item_id: &ItemId,
        category_name: &str,
    ) -> Option<Vec<ClipboardItem>> {
        match self.items.assign_category(item_id, category_name).await {
            Ok(items) => Some(items),
            Err(err) => {
                warn!(error = %err, "assigning category failed");
                None
            }
        }
    }

    /// Snapshot of the current item collection.
    pub async fn items(&self) -> Vec<ClipboardItem> {
        self.state.lock().await.items.clone()
    }

    /// Snapshot of the current category collection.
    pub async fn categories(&self) -> Vec<Category> {
        self.state.lock().await.categories.clone()
    }
}
