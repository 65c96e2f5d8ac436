//! Pagination window computation.
//!
//! Decides which contiguous slice of the item list is visible for a given
//! active index and page size, and renders it through an injected per-item
//! formatter. When the list wraps, the window is contiguous modulo the list
//! length: the cursor scrolls down to mid-page and then stays put while the
//! list rotates beneath it.

use std::fmt::Display;

use crate::item::Item;

/// Indices of the items visible for the given active index.
///
/// The active index is always inside the returned window. A `page_size` of
/// zero is treated as one.
#[must_use]
pub fn visible_window(len: usize, active: usize, page_size: usize, wrap: bool) -> Vec<usize> {
    let page_size = page_size.max(1);

    if len <= page_size {
        return (0..len).collect();
    }

    // Row the cursor occupies within the window: it starts at the top and
    // sinks to mid-page as the user moves down.
    let pointer = active.min((page_size - 1) / 2);

    if wrap {
        let start = (active + len - pointer) % len;
        (0..page_size).map(|offset| (start + offset) % len).collect()
    } else {
        let start = (active - pointer).min(len - page_size);
        (start..start + page_size).collect()
    }
}

/// Renders the visible window, one line per item, through `render_item`.
///
/// This is the reusable pagination primitive the frontend builds its body
/// from: the formatter receives each visible item together with whether it
/// is the active one.
pub fn render_window<T, F>(
    items: &[Item<T>],
    active: usize,
    page_size: usize,
    wrap: bool,
    mut render_item: F,
) -> String
where
    T: Display,
    F: FnMut(&Item<T>, bool) -> String,
{
    visible_window(items.len(), active, page_size, wrap)
        .into_iter()
        .map(|index| render_item(&items[index], index == active))
        .collect::<Vec<_>>()
        .join("\n")
}
