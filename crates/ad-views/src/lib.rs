//! Dashboard views: filter controls, the alumni table, aggregate panels,
//! charts and the PDF report.

pub mod charts;
pub mod export;
pub mod filters;
pub mod stats;
pub mod tables;

pub use charts::{BatchChart, ChartStyle, Charts, SupportChart};
pub use export::{export_pdf, export_report, ExportError, PdfReportWriter, ReportLayout, ReportWriter};
pub use filters::{FilterAction, FilterBar};
pub use stats::{state_list, state_list_ui, StateListEntry, SummaryCounters};
pub use tables::{apply_action, TableAction, TableRow, TableView};

use ad_core::Dashboard;

/// Apply a filter edit to the controller
pub fn apply_filter_action(dashboard: &mut Dashboard, action: FilterAction) {
    match action {
        FilterAction::Search(term) => dashboard.set_search_term(term),
        FilterAction::Batch(batch) => dashboard.set_batch_filter(batch),
        FilterAction::State(state) => dashboard.set_state_filter(state),
        FilterAction::Support(support) => dashboard.set_support_filter(support),
    }
}
