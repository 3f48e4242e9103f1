//! Page slicing and pagination metadata

use serde::{Deserialize, Serialize};

/// Number of pages needed to show `total` items, `0` for an empty set
#[must_use]
pub const fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// Items on 1-based `page`
///
/// Pages past the end yield an empty slice.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    items.get(start..end).unwrap_or_default()
}

/// One entry of the page button row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageItem {
    /// Button for a page number
    Page(usize),
    /// Elided run of pages
    Gap,
}

/// Pagination metadata for one rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page (1-based)
    pub page: usize,

    /// Items per page
    pub page_size: usize,

    /// Total number of items
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there's a next page
    pub has_next: bool,

    /// Whether there's a previous page
    pub has_prev: bool,

    /// Next page number (if exists)
    pub next_page: Option<usize>,

    /// Previous page number (if exists)
    pub prev_page: Option<usize>,

    /// 1-based index of the first item shown, 0 when nothing is shown
    pub range_start: usize,

    /// 1-based index of the last item shown, 0 when nothing is shown
    pub range_end: usize,
}

impl PageMeta {
    /// Create pagination metadata
    #[must_use]
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let total_pages = total_pages(total, page_size);
        let has_next = page < total_pages;
        let has_prev = page > 1;

        let range_end = page.saturating_mul(page_size).min(total);
        let range_start = if total == 0 {
            0
        } else {
            page.saturating_sub(1)
                .saturating_mul(page_size)
                .saturating_add(1)
                .min(range_end)
        };

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next,
            has_prev,
            next_page: has_next.then(|| page + 1),
            prev_page: has_prev.then(|| page - 1),
            range_start,
            range_end,
        }
    }

    /// Page buttons: the first `width` pages, then a gap and the last page
    /// when there are more
    #[must_use]
    pub fn window(&self, width: usize) -> Vec<PageItem> {
        let mut items: Vec<PageItem> = (1..=self.total_pages.min(width))
            .map(PageItem::Page)
            .collect();

        if self.total_pages > width {
            items.push(PageItem::Gap);
            items.push(PageItem::Page(self.total_pages));
        }

        items
    }

    /// "Showing 1 to 15 of 50" style readout
    #[must_use]
    pub fn range_label(&self) -> String {
        format!(
            "Showing {} to {} of {}",
            self.range_start, self.range_end, self.total
        )
    }
}
