//! Summary counters and the per-state distribution list

use egui::{ProgressBar, RichText, Sense, Ui};

use ad_core::DataStore;

/// One headline counter card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterCard {
    /// Stable identifier of the card
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// The four headline counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCounters {
    pub total_alumni: u64,
    pub total_batches: u64,
    pub supporting: u64,
    pub states: u64,
}

impl SummaryCounters {
    pub fn from_store(store: &DataStore) -> Self {
        Self {
            total_alumni: store.headline_total(),
            total_batches: store.summary.total_batches(),
            supporting: store.summary.support_yes(),
            states: store.summary.states_represented(),
        }
    }

    pub fn cards(&self) -> [CounterCard; 4] {
        [
            CounterCard {
                id: "totalAlumniCount",
                label: "Total Alumni",
                value: self.total_alumni.to_string(),
            },
            CounterCard {
                id: "totalBatches",
                label: "Total Batches",
                value: self.total_batches.to_string(),
            },
            CounterCard {
                id: "supportYesCount",
                label: "Supporting Mentoring",
                value: self.supporting.to_string(),
            },
            CounterCard {
                id: "statesCount",
                label: "States Represented",
                value: self.states.to_string(),
            },
        ]
    }

    pub fn ui(&self, ui: &mut Ui) {
        ui.columns(4, |columns| {
            for (ui, card) in columns.iter_mut().zip(self.cards()) {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(card.value).size(28.0).strong());
                        ui.label(RichText::new(card.label).weak());
                    });
                });
            }
        });
    }
}

/// One row of the state distribution list
#[derive(Debug, Clone, PartialEq)]
pub struct StateListEntry {
    pub state: String,
    pub count: u64,
    pub percentage: f64,
    /// Progress bar width in percent, always within [0, 100]
    pub bar_width: f64,
}

impl StateListEntry {
    /// "`count` alumni (`percentage`%)"
    pub fn caption(&self) -> String {
        format!("{} alumni ({:.1}%)", self.count, self.percentage)
    }
}

/// Progress width for `count` out of `total`; 0 when `total` is 0
pub fn progress_width(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (100.0 * count as f64 / total as f64).clamp(0.0, 100.0)
}

/// Project the state distribution into list rows
pub fn state_list(store: &DataStore) -> Vec<StateListEntry> {
    let total = store.summary.total_alumni();
    store
        .state_distribution
        .iter()
        .map(|entry| StateListEntry {
            state: entry.state.clone(),
            count: entry.count,
            percentage: entry.percentage,
            bar_width: progress_width(entry.count, total),
        })
        .collect()
}

/// Draw the state list. Returns the state the user clicked, if any.
pub fn state_list_ui(ui: &mut Ui, entries: &[StateListEntry]) -> Option<String> {
    let mut clicked = None;

    if entries.is_empty() {
        ui.label(RichText::new("No state data").weak());
        return None;
    }

    egui::ScrollArea::vertical()
        .id_source("state_distribution_list")
        .max_height(320.0)
        .show(ui, |ui| {
            for entry in entries {
                let response = ui
                    .scope(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&entry.state).strong());
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.label(RichText::new(entry.caption()).weak());
                            });
                        });
                        ui.add(ProgressBar::new((entry.bar_width / 100.0) as f32).desired_width(ui.available_width()));
                    })
                    .response
                    .interact(Sense::click())
                    .on_hover_text("Show alumni from this state");

                if response.clicked() {
                    clicked = Some(entry.state.clone());
                }
                ui.add_space(4.0);
            }
        });

    clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use ad_core::{AlumniRecord, StateDistributionEntry, SummaryStats, SupportStatus};

    #[test]
    fn test_single_record_counters() {
        let store = DataStore::new(
            vec![AlumniRecord {
                name: "A".into(),
                batch: "B-1".into(),
                state: "TX".into(),
                support_status: SupportStatus::Yes,
                ..Default::default()
            }],
            Vec::new(),
            Vec::new(),
            SummaryStats { total_alumni: Some(1), ..Default::default() },
        );

        let cards = SummaryCounters::from_store(&store).cards();
        let total = cards.iter().find(|c| c.id == "totalAlumniCount").unwrap();
        assert_eq!(total.value, "1");
        assert_eq!(cards[1].value, "16");
        assert_eq!(cards[2].value, "0");
    }

    #[test]
    fn test_progress_width_bounds() {
        assert_eq!(progress_width(5, 0), 0.0);
        assert_eq!(progress_width(0, 10), 0.0);
        assert_eq!(progress_width(5, 10), 50.0);
        // Payload counts may exceed the total; the bar is capped
        assert_eq!(progress_width(30, 10), 100.0);

        for count in 0..50 {
            for total in 0..50 {
                let width = progress_width(count, total);
                assert!((0.0..=100.0).contains(&width));
            }
        }
    }

    #[test]
    fn test_state_list_with_zero_total() {
        let store = DataStore::new(
            Vec::new(),
            Vec::new(),
            vec![StateDistributionEntry { state: "TX".into(), count: 4, percentage: 40.0 }],
            SummaryStats::default(),
        );

        let entries = state_list(&store);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].bar_width, 0.0);
        assert_eq!(entries[0].caption(), "4 alumni (40.0%)");
    }
}
