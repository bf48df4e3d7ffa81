//! # cs-app
//!
//! Application layer for Clipshelf. Wires the domain models from
//! `cs-core` to the key-value store port: category registry, clipboard
//! item store, sync loader, and the organizer facade that the
//! presentation collaborator calls into.

pub mod items;
pub mod loader;
pub mod organizer;
pub mod records;
pub mod registry;
pub mod state;

pub use items::ClipboardItemStore;
pub use loader::SyncLoader;
pub use organizer::Organizer;
pub use registry::{CategoryRegistry, CreateCategoryOutcome};
pub use state::{OrganizerState, SharedState};
