//! Organizer domain models.

mod category;
mod error;
mod grouping;
mod item;

pub use category::{normalize_name, Category};
pub use error::CategoryNameError;
pub use grouping::{group_by_category, group_by_date, CategoryGroup, DateGroup};
pub use item::ClipboardItem;
