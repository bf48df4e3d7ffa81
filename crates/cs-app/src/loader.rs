//! Startup hydration.

use std::sync::Arc;

use cs_core::KeyValueStorePort;
use tracing::{debug, warn};

use crate::records;
use crate::state::SharedState;

/// Hydrates the in-memory state from persistent storage on startup.
pub struct SyncLoader {
    store: Arc<dyn KeyValueStorePort>,
    state: SharedState,
}

impl SyncLoader {
    pub fn new(store: Arc<dyn KeyValueStorePort>, state: SharedState) -> Self {
        Self { store, state }
    }

    /// Issue the two reads and populate whatever came back.
    ///
    /// The reads are independent: either may complete first and either may
    /// fail without blocking or corrupting the other. An absent record
    /// leaves the prior in-memory value untouched instead of overwriting
    /// it with an empty collection; a failed read is logged and skipped.
    pub async fn load(&self) {
        let (items, categories) = tokio::join!(
            records::read_items(self.store.as_ref()),
            records::read_categories(self.store.as_ref()),
        );

        let mut state = self.state.lock().await;

        match items {
            Ok(Some(items)) => {
                debug!(count = items.len(), "loaded clipboard history");
                state.items = items;
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, "loading clipboard history failed"),
        }

        match categories {
            Ok(Some(categories)) => {
                debug!(count = categories.len(), "loaded categories");
                state.categories = categories;
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, "loading categories failed"),
        }
    }
}
