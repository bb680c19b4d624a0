//! Alumni table and its pagination controls

use egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use ad_core::{AlumniRecord, Dashboard, MobileNumber, Page, SortKey, SupportStatus};

use crate::charts::colors::support_color;

/// Placeholder for absent values
pub const NOT_AVAILABLE: &str = "N/A";

/// Country prefix added to bare mobile numbers
pub const MOBILE_PREFIX: &str = "+91";

/// User interaction coming out of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    Sort(SortKey),
    PreviousPage,
    NextPage,
    GoToPage(usize),
}

/// Display projection of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    /// Marker dot next to the name of supporting alumni
    pub support_marker: bool,
    pub batch: String,
    pub state: String,
    pub organization: String,
    pub designation: String,
    pub mobile: String,
    pub support: SupportStatus,
    pub linkedin: Option<String>,
}

impl TableRow {
    pub fn from_record(record: &AlumniRecord) -> Self {
        Self {
            name: record.name.clone(),
            support_marker: record.support_status == SupportStatus::Yes,
            batch: record.batch.clone(),
            state: record.state.clone(),
            organization: or_not_available(record.org_name.as_deref()),
            designation: or_not_available(record.designation.as_deref()),
            mobile: format_mobile(record.mobile.as_ref()),
            support: record.support_status,
            linkedin: record.linkedin.clone().filter(|url| !url.is_empty()),
        }
    }
}

fn or_not_available(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// `+91-` prefix for bare numbers, numbers already carrying `+91` pass
/// through, absent or empty values read `N/A`.
pub fn format_mobile(mobile: Option<&MobileNumber>) -> String {
    match mobile.map(MobileNumber::as_str) {
        None | Some("") => NOT_AVAILABLE.to_string(),
        Some(number) if number.starts_with(MOBILE_PREFIX) => number.to_string(),
        Some(number) => format!("{MOBILE_PREFIX}-{number}"),
    }
}

/// "Showing X to Y of Z"
pub fn showing_label(page: &Page) -> String {
    let start = if page.is_empty() { 0 } else { page.start_index + 1 };
    format!("Showing {} to {} of {}", start, page.end_index, page.total_items)
}

/// Column layout shared by header and body
const COLUMNS: [(&str, Option<SortKey>); 8] = [
    ("Name", Some(SortKey::Name)),
    ("Batch", Some(SortKey::Batch)),
    ("State", Some(SortKey::State)),
    ("Organization", Some(SortKey::Organization)),
    ("Designation", Some(SortKey::Designation)),
    ("Mobile", Some(SortKey::Mobile)),
    ("Support", Some(SortKey::Support)),
    ("LinkedIn", None),
];

/// Table of the current page of the filtered view
#[derive(Default)]
pub struct TableView;

impl TableView {
    pub fn new() -> Self {
        Self
    }

    /// Draw table and pagination. Returns at most one action per frame.
    pub fn ui(&mut self, ui: &mut Ui, dashboard: &Dashboard) -> Option<TableAction> {
        let rows: Vec<TableRow> = dashboard.page_records().map(TableRow::from_record).collect();
        let sort_key = dashboard.view().sort_key;
        let mut action = None;

        egui::ScrollArea::horizontal()
            .id_source("alumni_table_scroll")
            .show(ui, |ui| {
                if let Some(a) = Self::render_table(ui, &rows, sort_key) {
                    action = Some(a);
                }
            });

        ui.separator();

        if let Some(a) = pagination_ui(ui, &dashboard.page()) {
            action = Some(a);
        }

        action
    }

    fn render_table(ui: &mut Ui, rows: &[TableRow], sort_key: Option<SortKey>) -> Option<TableAction> {
        let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.8;
        let mut action = None;

        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            // The dashboard scrolls as a whole
            .vscroll(false);

        for (label, _) in COLUMNS {
            let width = if label == "Name" || label == "Organization" || label == "Designation" {
                180.0
            } else {
                100.0
            };
            builder = builder.column(Column::initial(width).at_least(60.0).clip(true));
        }

        builder
            .header(24.0, |mut header| {
                for (label, key) in COLUMNS {
                    header.col(|ui| match key {
                        Some(key) => {
                            let text = if sort_key == Some(key) {
                                format!("{label} ⏶")
                            } else {
                                label.to_string()
                            };
                            if ui
                                .add(egui::Label::new(RichText::new(text).strong()).sense(egui::Sense::click()))
                                .on_hover_text("Sort ascending")
                                .clicked()
                            {
                                action = Some(TableAction::Sort(key));
                            }
                        }
                        None => {
                            ui.strong(label);
                        }
                    });
                }
            })
            .body(|mut body| {
                for row_data in rows {
                    body.row(text_height, |mut row| {
                        row.col(|ui| {
                            if row_data.support_marker {
                                let (dot, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                                ui.painter().circle_filled(dot.center(), 4.0, support_color(SupportStatus::Yes));
                            }
                            ui.label(&row_data.name);
                        });
                        row.col(|ui| {
                            ui.label(&row_data.batch);
                        });
                        row.col(|ui| {
                            ui.label(&row_data.state);
                        });
                        row.col(|ui| {
                            ui.label(&row_data.organization);
                        });
                        row.col(|ui| {
                            ui.label(&row_data.designation);
                        });
                        row.col(|ui| {
                            ui.monospace(&row_data.mobile);
                        });
                        row.col(|ui| {
                            status_badge(ui, row_data.support);
                        });
                        row.col(|ui| match &row_data.linkedin {
                            Some(url) => {
                                ui.hyperlink_to("Connect", url);
                            }
                            None => {
                                ui.weak(NOT_AVAILABLE);
                            }
                        });
                    });
                }
            });

        if rows.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new("No alumni match the current filters").weak());
        }

        action
    }
}

fn status_badge(ui: &mut Ui, status: SupportStatus) {
    let color = support_color(status);
    egui::Frame::none()
        .fill(color.linear_multiply(0.2))
        .stroke(egui::Stroke::new(1.0, color))
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(6.0, 1.0))
        .show(ui, |ui| {
            ui.label(RichText::new(status.as_str()).color(color).small());
        });
}

/// Prev / numbered / next controls plus the "Showing" footer
pub fn pagination_ui(ui: &mut Ui, page: &Page) -> Option<TableAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(showing_label(page));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(page.has_next(), egui::Button::new("Next ›")).clicked() {
                action = Some(TableAction::NextPage);
            }

            // Right-to-left layout, so numbers are added in reverse
            for number in page.window().rev() {
                let current = number == page.current_page;
                let text = RichText::new(number.to_string());
                let button = if current {
                    egui::Button::new(text.strong()).fill(Color32::from_rgb(33, 128, 141))
                } else {
                    egui::Button::new(text)
                };
                if ui.add(button).clicked() && !current {
                    action = Some(TableAction::GoToPage(number));
                }
            }

            if ui.add_enabled(page.has_previous(), egui::Button::new("‹ Prev")).clicked() {
                action = Some(TableAction::PreviousPage);
            }
        });
    });

    action
}

/// Apply a table action to the controller
pub fn apply_action(dashboard: &mut Dashboard, action: TableAction) {
    match action {
        TableAction::Sort(key) => dashboard.sort_by(key),
        TableAction::PreviousPage => {
            dashboard.change_page(-1);
        }
        TableAction::NextPage => {
            dashboard.change_page(1);
        }
        TableAction::GoToPage(page) => {
            dashboard.go_to_page(page);
        }
    }
}
