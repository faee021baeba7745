//! Incremental filter over the catalog list.
//!
//! Filtering is a pure function re-run synchronously against the latest
//! [`list()`](crate::GalleryRegistry::list) output on every keystroke and on
//! every change notification; the catalog is small enough that no incremental
//! indexing is warranted.

use crate::item::GalleryItem;

/// Lowercase haystack an item is matched against: `"<name> <title>"`, with an
/// absent title contributing the empty string.
#[must_use]
pub fn search_haystack(item: &GalleryItem) -> String {
    format!("{} {}", item.name, item.subtitle()).to_lowercase()
}

/// Indices of `items` whose name or title contains `query`, case-insensitive.
///
/// Order-preserving; an empty query matches everything.
#[must_use]
pub fn filter_indices(items: &[GalleryItem], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| search_haystack(item).contains(&needle))
        .map(|(index, _)| index)
        .collect()
}
