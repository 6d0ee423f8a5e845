//! Pagination stage: page slicing, summary line, and page-button windowing.
//!
//! Pages are 1-based throughout.

use super::types::PageSize;
use std::fmt;
use std::ops::Range;

/// Pages shown on each side of the current page in the window.
pub const WINDOW_RADIUS: usize = 2;

/// Number of pages needed for `count` items. Zero items need zero pages.
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get())
}

/// Clamp `page` into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, count: usize, page_size: PageSize) -> usize {
    page.clamp(1, total_pages(count, page_size).max(1))
}

/// Index range of `page` within `count` items, clamped to bounds.
///
/// An out-of-range page yields an empty range at the end.
pub fn page_bounds(count: usize, page: usize, page_size: PageSize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size.get());
    let end = start.saturating_add(page_size.get());
    start.min(count)..end.min(count)
}

/// Slice of `items` shown on `page`.
pub fn paginate<T>(items: &[T], page: usize, page_size: PageSize) -> &[T] {
    &items[page_bounds(items.len(), page, page_size)]
}

/// Human-readable position summary for the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSummary {
    /// The derived view is empty.
    Empty,
    /// 1-based inclusive row range out of `total`.
    Showing {
        /// First row shown.
        first: usize,
        /// Last row shown.
        last: usize,
        /// Rows in the derived view.
        total: usize,
    },
}

impl PageSummary {
    /// Summary for `page` over `count` items.
    pub fn new(count: usize, page: usize, page_size: PageSize) -> Self {
        if count == 0 {
            return PageSummary::Empty;
        }
        let start = page.saturating_sub(1).saturating_mul(page_size.get());
        let end = start.saturating_add(page_size.get());
        PageSummary::Showing {
            first: start + 1,
            last: end.min(count),
            total: count,
        }
    }
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSummary::Empty => write!(f, "No results"),
            PageSummary::Showing { first, last, total } => {
                write!(f, "Showing {first}-{last} of {total}")
            }
        }
    }
}

/// One slot of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Button for a 1-based page.
    Page(usize),
    /// Gap between buttons.
    Ellipsis,
}

/// Page buttons around `current`.
///
/// First page, an ellipsis if there is a gap, up to [`WINDOW_RADIUS`] pages
/// either side of `current`, an ellipsis if there is a gap, then the last page.
/// Empty when there is at most one page (no bar is shown).
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let start = current.saturating_sub(WINDOW_RADIUS).max(1);
    let end = (current + WINDOW_RADIUS).min(total_pages);

    let mut items = Vec::with_capacity(end - start + 5);
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total_pages {
        if end < total_pages - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total_pages));
    }
    items
}
