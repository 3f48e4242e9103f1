//! Interactive table state and its projection into a renderable page

use crate::filter::{StatusFilter, filter_rows};
use crate::pagination::{PageItem, PageMeta, paginate, total_pages};
use crate::sort::{SortDirection, SortField, sort_rows};
use insights_core::{CampaignRow, TableConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Why a projected page has no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// A search query is active and nothing matched it
    NoMatches,
    /// There is nothing to show even without a query
    NoData,
}

impl EmptyState {
    /// Message for the empty table body
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoMatches => "No campaigns found matching your search.",
            Self::NoData => "No data available.",
        }
    }
}

/// Click-through rate badge tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtrTier {
    /// Below 2.5%
    Low,
    /// 2.5% up to 3.0%
    Medium,
    /// 3.0% and above
    High,
}

impl CtrTier {
    /// Tier for a click-through rate given in percent
    #[must_use]
    pub fn of(ctr: f64) -> Self {
        if ctr >= 3.0 {
            Self::High
        } else if ctr >= 2.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Tier for a row's click-through rate
    #[must_use]
    pub fn for_row(row: &CampaignRow) -> Self {
        Self::of(row.ctr)
    }

    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// User-controlled table state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableViewState {
    /// Column the rows are sorted by
    pub sort_field: SortField,
    /// Sort direction
    pub sort_direction: SortDirection,
    /// Current page (1-based)
    pub page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Status dropdown selection
    pub status_filter: StatusFilter,
    /// Search box text
    pub search_query: String,
}

impl Default for TableViewState {
    fn default() -> Self {
        Self {
            sort_field: SortField::Campaign,
            sort_direction: SortDirection::Ascending,
            page: 1,
            page_size: TableConfig::default().page_size,
            status_filter: StatusFilter::All,
            search_query: String::new(),
        }
    }
}

/// One rendered page of the campaign table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePage<'a> {
    /// Rows on the current page
    pub visible_rows: Vec<&'a CampaignRow>,
    /// Number of rows after filtering
    pub total_filtered: usize,
    /// Pagination metadata
    pub meta: PageMeta,
    /// Page button row
    pub window: Vec<PageItem>,
    /// Set when there are no rows to show
    pub empty_state: Option<EmptyState>,
}

impl TablePage<'_> {
    /// Current page (1-based)
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.meta.page
    }

    /// Total number of pages
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.meta.total_pages
    }

    /// Whether a previous page exists
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.meta.has_prev
    }

    /// Whether a next page exists
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.meta.has_next
    }
}

/// Campaign table view-model
///
/// Owns the rows of the current snapshot and the [`TableViewState`]. The
/// filtered and sorted rows are recomputed on every read and never stored.
#[derive(Debug, Clone)]
pub struct TableView {
    rows: Arc<[CampaignRow]>,
    state: TableViewState,
    page_window: usize,
}

impl TableView {
    /// Create a view over `rows`
    ///
    /// A zero page size or window is raised to 1.
    #[must_use]
    pub fn new(rows: impl Into<Arc<[CampaignRow]>>, page_size: usize, page_window: usize) -> Self {
        Self {
            rows: rows.into(),
            state: TableViewState {
                page_size: page_size.max(1),
                ..TableViewState::default()
            },
            page_window: page_window.max(1),
        }
    }

    /// Create a view using the configured page size and window
    #[must_use]
    pub fn from_config(rows: impl Into<Arc<[CampaignRow]>>, config: &TableConfig) -> Self {
        Self::new(rows, config.page_size, config.page_window)
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &TableViewState {
        &self.state
    }

    /// All rows, before filtering
    #[must_use]
    pub fn rows(&self) -> &[CampaignRow] {
        &self.rows
    }

    /// Swap in the rows of a newer snapshot, keeping the current page in range
    pub fn set_rows(&mut self, rows: impl Into<Arc<[CampaignRow]>>) {
        self.rows = rows.into();
        self.state.page = self.clamp_page(self.state.page);
    }

    /// Replace the search text and return to the first page
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.state.page = 1;
        debug!(query = %self.state.search_query, "Table search changed");
    }

    /// Clear the search text and return to the first page
    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    /// Replace the status filter and return to the first page
    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.state.status_filter = status;
        self.state.page = 1;
        debug!(status = %status, "Table status filter changed");
    }

    /// Header click: flip the direction of the current column, or sort a new
    /// column ascending
    pub fn toggle_sort(&mut self, field: SortField) {
        if field == self.state.sort_field {
            self.state.sort_direction = self.state.sort_direction.flipped();
        } else {
            self.state.sort_field = field;
            self.state.sort_direction = SortDirection::Ascending;
        }
        debug!(
            field = %self.state.sort_field,
            direction = ?self.state.sort_direction,
            "Table sort changed"
        );
    }

    /// Sort by `field` in an explicit direction
    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) {
        self.state.sort_field = field;
        self.state.sort_direction = direction;
    }

    /// Jump to `page`, clamped to the available pages; returns the page set
    pub fn set_page(&mut self, page: usize) -> usize {
        self.state.page = self.clamp_page(page);
        self.state.page
    }

    /// Advance one page unless already on the last
    pub fn next_page(&mut self) -> usize {
        self.set_page(self.state.page.saturating_add(1))
    }

    /// Go back one page unless already on the first
    pub fn prev_page(&mut self) -> usize {
        self.set_page(self.state.page.saturating_sub(1))
    }

    /// Total pages for the current filter
    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_sorted().len(), self.state.page_size)
    }

    /// The full filtered and sorted sequence
    #[must_use]
    pub fn filtered_sorted(&self) -> Vec<&CampaignRow> {
        let mut rows = filter_rows(
            &self.rows,
            &self.state.search_query,
            self.state.status_filter,
        );
        sort_rows(&mut rows, self.state.sort_field, self.state.sort_direction);
        rows
    }

    /// Rows for an export collaborator: every filtered row, not just a page
    #[must_use]
    pub fn export_rows(&self) -> Vec<&CampaignRow> {
        self.filtered_sorted()
    }

    /// Project the current state into a renderable page
    #[must_use]
    pub fn project(&self) -> TablePage<'_> {
        let rows = self.filtered_sorted();
        let total_filtered = rows.len();
        let meta = PageMeta::new(self.state.page, self.state.page_size, total_filtered);
        let window = meta.window(self.page_window);

        let empty_state = (total_filtered == 0).then_some(if self.state.search_query.is_empty() {
            EmptyState::NoData
        } else {
            EmptyState::NoMatches
        });

        TablePage {
            visible_rows: paginate(&rows, self.state.page, self.state.page_size).to_vec(),
            total_filtered,
            meta,
            window,
            empty_state,
        }
    }

    fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages().max(1))
    }
}
