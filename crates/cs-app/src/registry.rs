//! Category registry.
//!
//! Owns the category collection and enforces name uniqueness under
//! trim+lowercase normalization. Two creation paths with different
//! duplicate policies exist on purpose and must stay distinct:
//! [`CategoryRegistry::ensure_category`] silently reuses an existing
//! match, [`CategoryRegistry::create_category`] rejects it with a
//! user-facing outcome.

use std::sync::Arc;

use anyhow::Result;
use cs_core::{normalize_name, Category, CategoryNameError, KeyValueStorePort};
use tracing::info;

use crate::records;
use crate::state::SharedState;

/// Result of the interactive creation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateCategoryOutcome {
    Created(Category),
    /// A normalized match already exists; surfaced to the user as a
    /// blocking notice, with no state change.
    DuplicateName { existing: Category },
    /// Store or validation failure. Emitted only by the organizer facade;
    /// details were already logged there.
    Failed,
}

#[derive(Clone)]
pub struct CategoryRegistry {
    store: Arc<dyn KeyValueStorePort>,
    state: SharedState,
}

impl CategoryRegistry {
    pub fn new(store: Arc<dyn KeyValueStorePort>, state: SharedState) -> Self {
        Self { store, state }
    }

    /// Get-or-create a category by name.
    ///
    /// Loads the current collection from the store and returns an
    /// existing normalized match unchanged, without a persistence write.
    /// Otherwise mints a new category, persists the full updated
    /// collection write-through, mirrors it, and returns the new value.
    ///
    /// The state mutex is held across the read-modify-write, so
    /// overlapping calls for the same new name serialize and the second
    /// one observes the first.
    pub async fn ensure_category(&self, name: &str) -> Result<Category> {
        if name.trim().is_empty() {
            return Err(CategoryNameError::Empty.into());
        }

        let mut state = self.state.lock().await;

        let normalized = normalize_name(name);
        let categories = records::read_categories(self.store.as_ref())
            .await?
            .unwrap_or_default();
        if let Some(existing) = categories
            .iter()
            .find(|c| c.normalized_name() == normalized)
        {
            return Ok(existing.clone());
        }

        let category = Category::new(name)?;
        let mut updated = categories;
        updated.push(category.clone());
        records::write_categories(self.store.as_ref(), &updated).await?;
        state.categories = updated;

        info!(category = %category.name, id = %category.id, "created category on demand");
        Ok(category)
    }

    /// Interactive creation path.
    ///
    /// Same normalization and duplicate scan as [`Self::ensure_category`],
    /// but a duplicate is a terminal user-facing branch rather than a
    /// silent reuse: the operation aborts with
    /// [`CreateCategoryOutcome::DuplicateName`] and no state change.
    pub async fn create_category(&self, name: &str) -> Result<CreateCategoryOutcome> {
        if name.trim().is_empty() {
            return Err(CategoryNameError::Empty.into());
        }

        let mut state = self.state.lock().await;

        let normalized = normalize_name(name);
        let categories = records::read_categories(self.store.as_ref())
            .await?
            .unwrap_or_default();
        if let Some(existing) = categories
            .iter()
            .find(|c| c.normalized_name() == normalized)
        {
            return Ok(CreateCategoryOutcome::DuplicateName {
                existing: existing.clone(),
            });
        }

        let category = Category::new(name)?;
        let mut updated = categories;
        updated.push(category.clone());
        records::write_categories(self.store.as_ref(), &updated).await?;
        state.categories = updated;

        info!(category = %category.name, id = %category.id, "created category");
        Ok(CreateCategoryOutcome::Created(category))
    }
}
