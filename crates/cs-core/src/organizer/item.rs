use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::ids::ItemId;

/// A captured piece of clipboard content.
///
/// Items are created by the capture mechanism (outside this core) without
/// a category; the only mutation this core performs is the reassignment
/// that stores a by-value copy of a [`Category`]. Later category edits do
/// not propagate into already-tagged items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardItem {
    pub id: ItemId,
    /// Unix epoch milliseconds, persisted under the wire name `timestamp`.
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl ClipboardItem {
    pub fn new(id: ItemId, timestamp_ms: i64, content: impl Into<String>) -> Self {
        Self {
            id,
            timestamp_ms,
            content: content.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}
