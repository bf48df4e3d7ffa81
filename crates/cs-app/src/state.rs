use std::sync::Arc;

use cs_core::{Category, ClipboardItem};
use tokio::sync::Mutex;

/// In-memory mirror of the two persisted collections.
///
/// An explicit state container shared by the registry, the item store,
/// and the loader. Every mutation persists to the store first and updates
/// this mirror afterwards; the persisted records stay the source of truth
/// and the mirror only serves the current session.
#[derive(Debug, Default)]
pub struct OrganizerState {
    pub items: Vec<ClipboardItem>,
    pub categories: Vec<Category>,
}

/// Shared handle to the state container.
///
/// The mutex is held across a component's store read-modify-write, which
/// serializes overlapping category creations: two rapid requests for the
/// same new name cannot both miss the duplicate scan.
pub type SharedState = Arc<Mutex<OrganizerState>>;

pub fn shared_state() -> SharedState {
    Arc::new(Mutex::new(OrganizerState::default()))
}
