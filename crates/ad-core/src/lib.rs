//! Core functionality for the alumni dashboard
//!
//! This crate holds the record model, the read-only data store, the pure
//! filter/sort/paginate pipeline and the controller that owns the
//! interactive state.

pub mod dashboard;
pub mod events;
pub mod model;
pub mod pipeline;
pub mod store;
pub mod theme;

// Re-export commonly used types
pub use dashboard::{Dashboard, ViewState};
pub use events::EventBus;
pub use model::{
    AlumniRecord, BatchDistributionEntry, MobileNumber, StateDistributionEntry, SummaryStats,
    SupportStatus,
};
pub use pipeline::{FilterState, Page, SortKey, ITEMS_PER_PAGE};
pub use store::DataStore;
pub use theme::Theme;
