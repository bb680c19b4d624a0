//! Pure record pipeline: filter, then sort, then paginate
//!
//! Every stage works on indices into the store's record list so the
//! records themselves are never copied or reordered.

pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::{filter_records, FilterState};
pub use paginate::{page_window, paginate, Page, ITEMS_PER_PAGE, PAGE_WINDOW};
pub use sort::{sort_records, SortKey};
