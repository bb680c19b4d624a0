//! Dashboard controller: owns the dataset plus the filter and view state
//! and drives the filter → sort → paginate pipeline.

use std::sync::Arc;

use tracing::{debug, info};

use crate::events::{events, EventBus};
use crate::model::{AlumniRecord, SupportStatus};
use crate::pipeline::{filter_records, paginate, sort_records, FilterState, Page, SortKey, ITEMS_PER_PAGE};
use crate::store::DataStore;
use crate::theme::Theme;

/// Page, sort and theme state of the table view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// 1-based page number
    pub current_page: usize,
    pub items_per_page: usize,
    pub sort_key: Option<SortKey>,
    pub theme: Theme,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: ITEMS_PER_PAGE,
            sort_key: None,
            theme: Theme::Dark,
        }
    }
}

/// The dashboard controller
pub struct Dashboard {
    store: DataStore,
    filter: FilterState,
    view: ViewState,

    /// Filtered and sorted indices into `store.records`
    visible: Vec<usize>,

    event_bus: Option<Arc<EventBus>>,
}

impl Dashboard {
    /// Install a freshly loaded dataset with empty filters on page 1
    pub fn new(store: DataStore) -> Self {
        let visible = (0..store.len()).collect();
        Self {
            store,
            filter: FilterState::default(),
            view: ViewState::default(),
            visible,
            event_bus: None,
        }
    }

    /// Publish pipeline and theme events to `bus`
    pub fn with_event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.event_bus = Some(bus);
        self
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn theme(&self) -> Theme {
        self.view.theme
    }

    /// Number of records that pass the current filter
    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    /// Records of the current view in display order
    pub fn filtered_records(&self) -> impl Iterator<Item = &AlumniRecord> + '_ {
        self.visible.iter().map(move |&idx| &self.store.records[idx])
    }

    /// Page metadata for the current page
    pub fn page(&self) -> Page {
        paginate(self.visible.len(), self.view.items_per_page, self.view.current_page)
    }

    /// Records on the current page
    pub fn page_records(&self) -> impl Iterator<Item = &AlumniRecord> + '_ {
        let page = self.page();
        page.slice(&self.visible)
            .iter()
            .map(move |&idx| &self.store.records[idx])
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
        self.apply_filters();
    }

    pub fn set_batch_filter(&mut self, batch: Option<String>) {
        self.filter.batch = batch.filter(|b| !b.is_empty());
        self.apply_filters();
    }

    pub fn set_state_filter(&mut self, state: Option<String>) {
        self.filter.state = state.filter(|s| !s.is_empty());
        self.apply_filters();
    }

    pub fn set_support_filter(&mut self, support: Option<SupportStatus>) {
        self.filter.support = support;
        self.apply_filters();
    }

    /// Replace the whole filter state at once
    pub fn set_filters(&mut self, filter: FilterState) {
        self.filter = filter;
        self.apply_filters();
    }

    /// Re-run the filter, re-apply the current sort and go back to page 1
    pub fn apply_filters(&mut self) {
        self.visible = filter_records(&self.store.records, &self.filter);
        if let Some(key) = self.view.sort_key {
            sort_records(&self.store.records, &mut self.visible, key);
        }
        self.view.current_page = 1;

        debug!(
            "Filter matched {} of {} records",
            self.visible.len(),
            self.store.len()
        );

        self.publish(events::FiltersApplied {
            matched: self.visible.len(),
            total: self.store.len(),
        });
    }

    /// Sort the current view ascending by `key`. Stays on the current page.
    pub fn sort_by(&mut self, key: SortKey) {
        self.view.sort_key = Some(key);
        sort_records(&self.store.records, &mut self.visible, key);
        debug!("Sorted {} records by {}", self.visible.len(), key.label());
    }

    /// Move `delta` pages; ignored when the target is outside `[1, total_pages]`
    pub fn change_page(&mut self, delta: isize) -> bool {
        let total_pages = self.page().total_pages;
        let target = self.view.current_page as isize + delta;

        if target >= 1 && target as usize <= total_pages {
            self.view.current_page = target as usize;
            true
        } else {
            false
        }
    }

    /// Jump straight to `page`; ignored when out of range
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.page().total_pages {
            self.view.current_page = page;
            true
        } else {
            false
        }
    }

    /// Flip between dark and light and return the new theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.view.theme = self.view.theme.toggled();
        info!("Theme switched to {}", self.view.theme);
        self.publish(events::ThemeChanged { theme: self.view.theme });
        self.view.theme
    }

    fn publish<E: crate::events::Event>(&self, event: E) {
        if let Some(bus) = &self.event_bus {
            bus.publish(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SummaryStats;

    fn store_with(count: usize) -> DataStore {
        let records = (0..count)
            .map(|i| AlumniRecord {
                name: format!("Alumnus {i:03}"),
                batch: format!("B-{}", i % 3 + 1),
                state: if i % 2 == 0 { "TX".into() } else { "CA".into() },
                support_status: if i % 4 == 0 { SupportStatus::Yes } else { SupportStatus::No },
                ..Default::default()
            })
            .collect();
        DataStore::new(records, Vec::new(), Vec::new(), SummaryStats::default())
    }

    #[test]
    fn test_initial_state() {
        let dashboard = Dashboard::new(store_with(120));
        assert!(dashboard.filter().is_empty());
        assert_eq!(dashboard.view().current_page, 1);
        assert_eq!(dashboard.view().items_per_page, 50);
        assert_eq!(dashboard.theme(), Theme::Dark);
        assert_eq!(dashboard.page().total_pages, 3);
        assert_eq!(dashboard.page_records().count(), 50);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut dashboard = Dashboard::new(store_with(120));
        assert!(dashboard.change_page(1));
        assert_eq!(dashboard.view().current_page, 2);

        dashboard.set_state_filter(Some("TX".into()));
        assert_eq!(dashboard.view().current_page, 1);
        assert_eq!(dashboard.filtered_len(), 60);
        assert!(dashboard.filtered_records().all(|r| r.state == "TX"));
    }

    #[test]
    fn test_change_page_is_bounded() {
        let mut dashboard = Dashboard::new(store_with(120));
        assert!(!dashboard.change_page(-1));
        assert!(dashboard.change_page(2));
        assert_eq!(dashboard.view().current_page, 3);
        assert!(!dashboard.change_page(1));
        assert_eq!(dashboard.page_records().count(), 20);

        assert!(dashboard.go_to_page(1));
        assert!(!dashboard.go_to_page(4));
        assert!(!dashboard.go_to_page(0));
    }

    #[test]
    fn test_search_without_matches_disables_navigation() {
        let mut dashboard = Dashboard::new(store_with(10));
        dashboard.set_search_term("xyz");

        let page = dashboard.page();
        assert_eq!(dashboard.page_records().count(), 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_previous());
        assert!(!page.has_next());
        assert!(!dashboard.change_page(1));
    }

    #[test]
    fn test_sort_survives_filter_changes() {
        let mut dashboard = Dashboard::new(store_with(6));
        dashboard.sort_by(SortKey::Batch);

        let batches: Vec<_> = dashboard.filtered_records().map(|r| r.batch.clone()).collect();
        assert_eq!(batches, vec!["B-1", "B-1", "B-2", "B-2", "B-3", "B-3"]);

        dashboard.set_support_filter(Some(SupportStatus::No));
        let batches: Vec<_> = dashboard.filtered_records().map(|r| r.batch.clone()).collect();
        assert_eq!(batches, vec!["B-1", "B-2", "B-3", "B-3"]);
    }

    #[test]
    fn test_empty_selector_clears_filter() {
        let mut dashboard = Dashboard::new(store_with(6));
        dashboard.set_batch_filter(Some("B-1".into()));
        assert_eq!(dashboard.filtered_len(), 2);

        dashboard.set_batch_filter(Some(String::new()));
        assert!(dashboard.filter().batch.is_none());
        assert_eq!(dashboard.filtered_len(), 6);
    }

    #[test]
    fn test_theme_toggle_publishes() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let bus = Arc::new(EventBus::new());
        let toggles = Arc::new(AtomicUsize::new(0));
        let seen = toggles.clone();
        bus.subscribe::<events::ThemeChanged>(crate::events::handler_from_fn(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        let mut dashboard = Dashboard::new(store_with(1)).with_event_bus(bus);
        assert_eq!(dashboard.toggle_theme(), Theme::Light);
        assert_eq!(dashboard.toggle_theme(), Theme::Dark);
        assert_eq!(toggles.load(Ordering::SeqCst), 2);
    }
}
