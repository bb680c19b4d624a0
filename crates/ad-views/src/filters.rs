//! Search box and the batch / state / support selectors

use egui::Ui;

use ad_core::{DataStore, FilterState, SupportStatus};

/// A single filter edit made by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    Search(String),
    Batch(Option<String>),
    State(Option<String>),
    Support(Option<SupportStatus>),
}

/// Filter controls with their option lists, built once per dataset
pub struct FilterBar {
    batch_options: Vec<String>,
    state_options: Vec<String>,
}

impl FilterBar {
    pub fn new(store: &DataStore) -> Self {
        Self {
            batch_options: store.batch_options(),
            state_options: store.state_options(),
        }
    }

    pub fn batch_options(&self) -> &[String] {
        &self.batch_options
    }

    pub fn state_options(&self) -> &[String] {
        &self.state_options
    }

    /// Draw the controls for `current`. Returns the edit made this frame.
    pub fn ui(&self, ui: &mut Ui, current: &FilterState) -> Option<FilterAction> {
        let mut action = None;

        ui.horizontal_wrapped(|ui| {
            let mut search = current.search_term.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut search)
                    .hint_text("Search by name, designation, organization or mobile")
                    .desired_width(320.0),
            );
            if response.changed() {
                action = Some(FilterAction::Search(search));
            }

            if let Some(batch) = option_combo(ui, "batch_filter", "All Batches", &self.batch_options, &current.batch) {
                action = Some(FilterAction::Batch(batch));
            }

            if let Some(state) = option_combo(ui, "state_filter", "All States", &self.state_options, &current.state) {
                action = Some(FilterAction::State(state));
            }

            let mut support = current.support;
            egui::ComboBox::from_id_source("support_filter")
                .selected_text(support.map_or("All Support Status", |s| s.as_str()))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut support, None, "All Support Status");
                    for status in SupportStatus::ALL {
                        ui.selectable_value(&mut support, Some(status), status.as_str());
                    }
                });
            if support != current.support {
                action = Some(FilterAction::Support(support));
            }
        });

        action
    }
}

/// Combo over `options` plus an "all" entry. `Some(new)` when the selection changed.
fn option_combo(
    ui: &mut Ui,
    id: &str,
    all_label: &str,
    options: &[String],
    current: &Option<String>,
) -> Option<Option<String>> {
    let mut selected = current.clone();

    egui::ComboBox::from_id_source(id)
        .selected_text(selected.as_deref().unwrap_or(all_label))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, None, all_label);
            for option in options {
                ui.selectable_value(&mut selected, Some(option.clone()), option);
            }
        });

    (selected != *current).then_some(selected)
}
