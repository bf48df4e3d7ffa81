//! Pure grouped-view derivations.
//!
//! No I/O and no hidden state: both functions are plain functions of their
//! inputs and are recomputed by callers whenever the source collections
//! change.

use chrono::{DateTime, Local};

use super::category::Category;
use super::item::ClipboardItem;

/// One calendar-day bucket of the by-date view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    /// Local calendar date formatted as `YYYY-MM-DD`.
    pub date: String,
    pub items: Vec<ClipboardItem>,
}

/// One category bucket of the by-category view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<ClipboardItem>,
}

/// Partition items by their local calendar date.
///
/// The partition is stable: items keep their source order within a bucket,
/// and buckets appear in first-occurrence order of the source collection.
/// Dates without items do not appear, and no sorting is applied. Items
/// whose epoch-ms timestamp is unrepresentable are excluded.
pub fn group_by_date(items: &[ClipboardItem]) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();
    for item in items {
        let Some(date) = local_date_key(item.timestamp_ms) else {
            continue;
        };
        match groups.iter_mut().find(|g| g.date == date) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(DateGroup {
                date,
                items: vec![item.clone()],
            }),
        }
    }
    groups
}

fn local_date_key(timestamp_ms: i64) -> Option<String> {
    let utc: DateTime<chrono::Utc> = DateTime::from_timestamp_millis(timestamp_ms)?;
    Some(utc.with_timezone(&Local).format("%Y-%m-%d").to_string())
}

/// Partition items by known category.
///
/// A bucket is seeded for every known category (in category-collection
/// order), items are matched by normalized name, and empty buckets are
/// dropped at the end. Uncategorized items and items referencing a name
/// that matches no known category are silently excluded.
pub fn group_by_category(items: &[ClipboardItem], categories: &[Category]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = categories
        .iter()
        .map(|category| CategoryGroup {
            category: category.clone(),
            items: Vec::new(),
        })
        .collect();

    for item in items {
        let Some(assigned) = &item.category else {
            continue;
        };
        let key = assigned.normalized_name();
        if let Some(group) = groups
            .iter_mut()
            .find(|g| g.category.normalized_name() == key)
        {
            group.items.push(item.clone());
        }
    }

    groups.retain(|g| !g.items.is_empty());
    groups
}
