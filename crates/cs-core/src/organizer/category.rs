use serde::{Deserialize, Serialize};

use super::error::CategoryNameError;
use crate::ids::CategoryId;

/// User-defined label used to group clipboard items.
///
/// Categories are never mutated or deleted after creation. Uniqueness is
/// enforced over the normalized name, not the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    /// Mint a category with a fresh id.
    ///
    /// The stored name is trimmed but keeps its original case; all
    /// comparisons go through [`normalize_name`].
    pub fn new(name: &str) -> Result<Self, CategoryNameError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CategoryNameError::Empty);
        }
        Ok(Self {
            id: CategoryId::new(),
            name: trimmed.to_string(),
        })
    }

    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Trim + lowercase transform used for name equality only. Stored display
/// names are never altered by it.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
