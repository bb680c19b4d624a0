//! The dashboard application: load lifecycle, layout and action wiring

use std::sync::Arc;
use std::time::Instant;

use eframe::egui::{self, Context, Ui};
use parking_lot::Mutex;
use tracing::{error, info, warn};

use ad_core::events::{events, handler_from_fn};
use ad_core::{Dashboard, DataStore, EventBus, Theme};
use ad_data::{DashboardConfig, LoadError};
use ad_ui::{HeaderAction, NavEvent, NavSection, UiState};
use ad_views::{
    apply_action, apply_filter_action, export_pdf, state_list, state_list_ui, Charts, FilterBar,
    SummaryCounters, TableView,
};

/// Result slot the background load writes into
type LoadSlot = Arc<Mutex<Option<Result<DataStore, LoadError>>>>;

/// Everything that only exists once the dataset is in
struct LoadedDashboard {
    dashboard: Dashboard,
    charts: Charts,
    filter_bar: FilterBar,
}

pub struct DashboardApp {
    config: DashboardConfig,

    /// Runs the initial load; kept alive for the app's lifetime
    _runtime: tokio::runtime::Runtime,

    event_bus: Arc<EventBus>,
    pending: LoadSlot,
    source_name: String,

    loaded: Option<LoadedDashboard>,
    ui_state: UiState,
    theme: Theme,
    table: TableView,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig, runtime: tokio::runtime::Runtime) -> Self {
        let theme = Theme::default();
        ad_ui::apply_theme(&cc.egui_ctx, theme);

        let event_bus = Arc::new(EventBus::new());
        subscribe_logging(&event_bus);

        let pending: LoadSlot = Arc::new(Mutex::new(None));
        let source_name = spawn_load(&runtime, &config, pending.clone(), cc.egui_ctx.clone());

        Self {
            ui_state: UiState::new(config.notification_duration()),
            config,
            _runtime: runtime,
            event_bus,
            pending,
            source_name,
            loaded: None,
            theme,
            table: TableView::new(),
        }
    }

    /// Pick up the load result once it lands
    fn poll_load(&mut self) {
        let Some(result) = self.pending.lock().take() else {
            return;
        };

        match result {
            Ok(store) => {
                self.event_bus.publish(events::DatasetLoaded {
                    source_name: self.source_name.clone(),
                    record_count: store.len(),
                });
                self.install(store);
                self.ui_state
                    .loading
                    .hide_after(Instant::now(), self.config.loading_delay());
            }
            Err(e) => {
                self.event_bus.publish(events::DatasetLoadFailed {
                    source_name: self.source_name.clone(),
                    error: e.to_string(),
                });
                self.ui_state.show_load_error();
            }
        }
    }

    fn install(&mut self, store: DataStore) {
        let mut dashboard = Dashboard::new(store).with_event_bus(self.event_bus.clone());
        if dashboard.theme() != self.theme {
            dashboard.toggle_theme();
        }

        let charts = Charts::new(dashboard.store(), self.theme);
        let filter_bar = FilterBar::new(dashboard.store());

        self.loaded = Some(LoadedDashboard {
            dashboard,
            charts,
            filter_bar,
        });
    }

    fn toggle_theme(&mut self, ctx: &Context) {
        self.theme = match &mut self.loaded {
            Some(loaded) => {
                let theme = loaded.dashboard.toggle_theme();
                loaded.charts.apply_theme(theme);
                theme
            }
            None => self.theme.toggled(),
        };
        ad_ui::apply_theme(ctx, self.theme);
    }

    fn export(&mut self) {
        let Some(loaded) = &self.loaded else {
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&self.config.report_file_name)
            .add_filter("PDF", &["pdf"])
            .save_file()
        else {
            info!("Report export cancelled");
            return;
        };

        match export_pdf(&loaded.dashboard, &path) {
            Ok(()) => {
                self.event_bus.publish(events::ReportExported {
                    path: Some(path.display().to_string()),
                    error: None,
                });
                self.ui_state.notifications.success("PDF exported successfully!");
            }
            Err(e) => {
                self.event_bus.publish(events::ReportExported {
                    path: Some(path.display().to_string()),
                    error: Some(e.to_string()),
                });
                self.ui_state
                    .notifications
                    .error("Error exporting PDF. Please try again.");
            }
        }
    }

    fn central_panel(&mut self, ctx: &Context) {
        let scroll_target = self.ui_state.scroll_target.take();
        let load_error = self.ui_state.load_error.clone();

        let mut filter_action = None;
        let mut table_action = None;
        let mut state_clicked = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = &load_error {
                ad_ui::error_banner(ui, message);
            }

            let Some(loaded) = self.loaded.as_mut() else {
                return;
            };
            let table = &mut self.table;

            egui::ScrollArea::vertical()
                .id_source("dashboard_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    section_heading(ui, NavSection::Overview, scroll_target);
                    SummaryCounters::from_store(loaded.dashboard.store()).ui(ui);
                    ui.add_space(16.0);

                    section_heading(ui, NavSection::Charts, scroll_target);
                    ui.columns(2, |columns| {
                        columns[0].label("Alumni per Batch");
                        loaded.charts.batch.ui(&mut columns[0]);
                        columns[1].label("Mentoring Support");
                        loaded.charts.support.ui(&mut columns[1]);
                    });
                    ui.add_space(16.0);

                    section_heading(ui, NavSection::States, scroll_target);
                    state_clicked = state_list_ui(ui, &state_list(loaded.dashboard.store()));
                    ui.add_space(16.0);

                    section_heading(ui, NavSection::Directory, scroll_target);
                    filter_action = loaded.filter_bar.ui(ui, loaded.dashboard.filter());
                    ui.add_space(8.0);
                    table_action = table.ui(ui, &loaded.dashboard);
                });
        });

        let Some(loaded) = self.loaded.as_mut() else {
            return;
        };

        if let Some(action) = filter_action {
            apply_filter_action(&mut loaded.dashboard, action);
        }
        if let Some(state) = state_clicked {
            loaded.dashboard.set_state_filter(Some(state));
            self.ui_state.scroll_target = Some(NavSection::Directory);
        }
        if let Some(action) = table_action {
            apply_action(&mut loaded.dashboard, action);
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        match ad_ui::header(ctx, self.theme, self.loaded.is_some()) {
            Some(HeaderAction::ToggleTheme) => self.toggle_theme(ctx),
            Some(HeaderAction::Export) => self.export(),
            Some(HeaderAction::OpenNavigation) => {
                self.ui_state.navigation.handle(NavEvent::Open);
            }
            None => {}
        }

        self.central_panel(ctx);

        if let Some(section) = self.ui_state.navigation.ui(ctx) {
            self.ui_state.scroll_target = Some(section);
        }
        self.ui_state.loading.ui(ctx);
        self.ui_state.notifications.ui(ctx);
    }
}

/// Heading for a section; scrolls into view when it is the nav target
fn section_heading(ui: &mut Ui, section: NavSection, target: Option<NavSection>) {
    let response = ui.heading(section.label());
    if target == Some(section) {
        response.scroll_to_me(Some(egui::Align::TOP));
    }
}

/// Start the one-shot load on `runtime`. Returns the source name.
fn spawn_load(runtime: &tokio::runtime::Runtime, config: &DashboardConfig, slot: LoadSlot, ctx: Context) -> String {
    let source = match config.source.build() {
        Ok(source) => source,
        Err(e) => {
            error!("Failed to create data source: {}", e);
            *slot.lock() = Some(Err(e));
            return source_label(&config.source);
        }
    };

    let name = source.source_name().to_string();
    runtime.spawn(async move {
        let result = ad_data::load(source.as_ref()).await;
        *slot.lock() = Some(result);
        ctx.request_repaint();
    });

    name
}

fn source_label(source: &ad_data::SourceConfig) -> String {
    match source {
        ad_data::SourceConfig::Url(url) => url.clone(),
        ad_data::SourceConfig::File(path) => path.display().to_string(),
    }
}

/// Log every dashboard event
fn subscribe_logging(bus: &EventBus) {
    bus.subscribe::<events::DatasetLoaded>(handler_from_fn(|event| {
        if let Some(e) = event.as_any().downcast_ref::<events::DatasetLoaded>() {
            info!("Dataset loaded from {}: {} records", e.source_name, e.record_count);
        }
    }));
    bus.subscribe::<events::DatasetLoadFailed>(handler_from_fn(|event| {
        if let Some(e) = event.as_any().downcast_ref::<events::DatasetLoadFailed>() {
            error!("Error loading data from {}: {}", e.source_name, e.error);
        }
    }));
    bus.subscribe::<events::FiltersApplied>(handler_from_fn(|event| {
        if let Some(e) = event.as_any().downcast_ref::<events::FiltersApplied>() {
            tracing::debug!("Showing {} of {} alumni", e.matched, e.total);
        }
    }));
    bus.subscribe::<events::ThemeChanged>(handler_from_fn(|event| {
        if let Some(e) = event.as_any().downcast_ref::<events::ThemeChanged>() {
            info!("Theme is now {}", e.theme);
        }
    }));
    bus.subscribe::<events::ReportExported>(handler_from_fn(|event| {
        if let Some(e) = event.as_any().downcast_ref::<events::ReportExported>() {
            match &e.error {
                None => info!("Report written to {}", e.path.as_deref().unwrap_or("?")),
                Some(err) => warn!("Report export failed: {}", err),
            }
        }
    }));
}
