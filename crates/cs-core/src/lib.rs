//! # cs-core
//!
//! Core domain models and grouping logic for Clipshelf.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod ids;
pub mod organizer;
pub mod ports;

// Re-export commonly used types at the crate root
pub use ids::{CategoryId, ItemId};
pub use organizer::{
    group_by_category, group_by_date, normalize_name, Category, CategoryGroup, CategoryNameError,
    ClipboardItem, DateGroup,
};
pub use ports::KeyValueStorePort;
