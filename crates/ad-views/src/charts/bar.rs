//! Alumni-per-batch bar chart

use egui::{Align2, Stroke, Ui};
use egui_plot::{Bar, BarChart, Plot, PlotPoint, Text};

use ad_core::{BatchDistributionEntry, Theme};

use super::colors::{batch_color, outline_color};
use super::{ChartData, ChartInstance, ChartKind};

/// Batch whose bar carries the annotation
pub const COVID_BATCH: &str = "B-13";

/// Annotation shown on the `B-13` bar
pub const COVID_ANNOTATION: &str = "COVID-19 Impact Year";

/// Bar chart of batch label → alumni count
pub struct BatchChart {
    instance: ChartInstance,
}

impl BatchChart {
    pub fn new(distribution: &[BatchDistributionEntry], theme: Theme) -> Self {
        let data = ChartData {
            labels: distribution.iter().map(|e| e.batch.clone()).collect(),
            values: distribution.iter().map(|e| e.count as f64).collect(),
            colors: (0..distribution.len()).map(batch_color).collect(),
        };

        Self {
            instance: ChartInstance::new(ChartKind::Bar, data, theme),
        }
    }

    pub fn instance(&self) -> &ChartInstance {
        &self.instance
    }

    pub fn instance_mut(&mut self) -> &mut ChartInstance {
        &mut self.instance
    }

    /// Extra tooltip line for a batch, if any
    pub fn annotation(label: &str) -> Option<&'static str> {
        (label == COVID_BATCH).then_some(COVID_ANNOTATION)
    }

    /// Tooltip text for one bar
    pub fn tooltip(label: &str, count: f64) -> String {
        match Self::annotation(label) {
            Some(note) => format!("{label}\nAlumni Count: {count}\n{note}"),
            None => format!("{label}\nAlumni Count: {count}"),
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        let size = egui::vec2(ui.available_width(), 280.0);
        self.instance.resize(size);

        let data = self.instance.data();
        if data.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No batch data to display");
            });
            return;
        }

        let style = self.instance.style();

        let bars: Vec<Bar> = data
            .labels
            .iter()
            .zip(&data.values)
            .zip(&data.colors)
            .enumerate()
            .map(|(i, ((label, value), color))| {
                Bar::new(i as f64, *value)
                    .width(0.7)
                    .name(label)
                    .fill(*color)
                    .stroke(Stroke::new(1.0, outline_color(*color)))
            })
            .collect();

        let chart = BarChart::new(bars)
            .element_formatter(Box::new(|bar, _chart| Self::tooltip(&bar.name, bar.value)));

        let labels = data.labels.clone();

        ui.scope(|ui| {
            // egui_plot draws its grid and axis text from the visuals
            let visuals = ui.visuals_mut();
            visuals.override_text_color = Some(style.tick_color);
            visuals.widgets.noninteractive.bg_stroke.color = style.grid_color;
            visuals.widgets.noninteractive.fg_stroke.color = style.grid_color;

            Plot::new("batch_distribution_chart")
                .height(size.y)
                .show_grid(true)
                .show_x(false)
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .include_y(0.0)
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(chart);

                    for (i, label) in labels.iter().enumerate() {
                        plot_ui.text(
                            Text::new(PlotPoint::new(i as f64, 0.0), label.as_str())
                                .anchor(Align2::CENTER_TOP)
                                .color(style.tick_color),
                        );
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribution() -> Vec<BatchDistributionEntry> {
        (1..=12)
            .map(|i| BatchDistributionEntry { batch: format!("B-{i}"), count: i * 10 })
            .chain(std::iter::once(BatchDistributionEntry { batch: "B-13".into(), count: 7 }))
            .collect()
    }

    #[test]
    fn test_chart_inputs_follow_distribution() {
        let chart = BatchChart::new(&distribution(), Theme::Dark);
        let data = chart.instance().data();

        assert_eq!(chart.instance().kind(), ChartKind::Bar);
        assert_eq!(data.len(), 13);
        assert_eq!(data.labels[0], "B-1");
        assert_eq!(data.values[1], 20.0);
        // Palette wraps after ten bars
        assert_eq!(data.colors[10], data.colors[0]);
    }

    #[test]
    fn test_annotation_only_on_b13() {
        assert_eq!(BatchChart::annotation("B-13"), Some(COVID_ANNOTATION));
        assert_eq!(BatchChart::annotation("B-12"), None);
        assert!(BatchChart::tooltip("B-13", 7.0).ends_with(COVID_ANNOTATION));
        assert!(!BatchChart::tooltip("B-1", 10.0).contains(COVID_ANNOTATION));
    }
}
