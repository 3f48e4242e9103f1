//! Table view-model for the campaign insights dashboard
//!
//! Raw campaign rows flow through three pure stages, `filter → sort →
//! paginate`, and [`TableView`] owns the interactive state that selects the
//! parameters of each stage.
//!
//! ```
//! use insights_table::{SortField, TableView};
//!
//! let mut view = TableView::new(insights_data::campaign_fixture(), 15, 5);
//! view.set_search("black");
//! assert_eq!(view.project().total_filtered, 1);
//!
//! view.clear_search();
//! view.toggle_sort(SortField::Spend);
//! view.toggle_sort(SortField::Spend);
//! assert_eq!(view.project().visible_rows[0].id, "50");
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod filter;
pub mod pagination;
pub mod sort;
pub mod view;

pub use filter::{StatusFilter, filter_rows};
pub use pagination::{PageItem, PageMeta, paginate, total_pages};
pub use sort::{SortDirection, SortField, compare_rows, sort_rows};
pub use view::{CtrTier, EmptyState, TablePage, TableView, TableViewState};
