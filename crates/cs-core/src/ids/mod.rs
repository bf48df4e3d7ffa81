use serde::{Deserialize, Serialize};

mod id_macro;
use id_macro::impl_id;

/// Identifier of a user-defined category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(String);

/// Identifier of a captured clipboard item. Minted by the capture
/// mechanism, which is outside this core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl_id!(CategoryId, ItemId);
