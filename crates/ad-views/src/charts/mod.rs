//! Batch and support charts built from the dataset aggregates

pub mod bar;
pub mod colors;
pub mod doughnut;
pub mod style;

pub use bar::{BatchChart, COVID_ANNOTATION, COVID_BATCH};
pub use doughnut::SupportChart;
pub use style::ChartStyle;

use egui::Color32;

use ad_core::{DataStore, Theme};

/// Chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Doughnut,
}

/// Labels with parallel values and colours
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<Color32>,
}

impl ChartData {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// A live chart: data, current style and a revision that advances on every
/// `update()`, so the renderer knows when its inputs changed.
#[derive(Debug, Clone)]
pub struct ChartInstance {
    kind: ChartKind,
    data: ChartData,
    style: ChartStyle,
    revision: u64,
    size: Option<egui::Vec2>,
}

impl ChartInstance {
    pub fn new(kind: ChartKind, data: ChartData, theme: Theme) -> Self {
        Self {
            kind,
            data,
            style: ChartStyle::for_theme(theme),
            revision: 0,
            size: None,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn data(&self) -> &ChartData {
        &self.data
    }

    pub fn style(&self) -> ChartStyle {
        self.style
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn size(&self) -> Option<egui::Vec2> {
        self.size
    }

    /// Re-apply theme colours in place, keeping the data
    pub fn apply_theme(&mut self, theme: Theme) {
        self.style = ChartStyle::for_theme(theme);
        self.update();
    }

    pub fn update(&mut self) {
        self.revision += 1;
    }

    /// Record the area the chart is drawn into
    pub fn resize(&mut self, size: egui::Vec2) {
        if self.size != Some(size) {
            self.size = Some(size);
            self.update();
        }
    }
}

/// Every chart on the dashboard
pub struct Charts {
    pub batch: BatchChart,
    pub support: SupportChart,
}

impl Charts {
    /// Build both charts from the store aggregates
    pub fn new(store: &DataStore, theme: Theme) -> Self {
        Self {
            batch: BatchChart::new(&store.batch_distribution, theme),
            support: SupportChart::new(&store.summary, theme),
        }
    }

    pub fn instances(&self) -> [&ChartInstance; 2] {
        [self.batch.instance(), self.support.instance()]
    }

    /// Push the theme's colours to every live chart
    pub fn apply_theme(&mut self, theme: Theme) {
        tracing::debug!("Re-styling charts for {} theme", theme);
        self.batch.instance_mut().apply_theme(theme);
        self.support.instance_mut().apply_theme(theme);
    }

    /// Current style of each chart, in a fixed order
    pub fn styles(&self) -> Vec<ChartStyle> {
        self.instances().iter().map(|c| c.style()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ad_core::{BatchDistributionEntry, SummaryStats};

    fn store() -> DataStore {
        DataStore::new(
            Vec::new(),
            vec![BatchDistributionEntry { batch: "B-1".into(), count: 5 }],
            Vec::new(),
            SummaryStats { support_yes: Some(3), ..Default::default() },
        )
    }

    #[test]
    fn test_double_toggle_restores_initial_style() {
        let mut theme = Theme::default();
        let mut charts = Charts::new(&store(), theme);
        let initial = charts.styles();

        theme = theme.toggled();
        charts.apply_theme(theme);
        assert_ne!(charts.styles(), initial);
        assert!(charts.styles().iter().all(|s| *s == ChartStyle::for_theme(Theme::Light)));

        theme = theme.toggled();
        charts.apply_theme(theme);
        assert_eq!(charts.styles(), initial);
    }

    #[test]
    fn test_theme_keeps_data_and_bumps_revision() {
        let mut charts = Charts::new(&store(), Theme::Dark);
        let data_before = charts.batch.instance().data().clone();
        let revision = charts.batch.instance().revision();

        charts.apply_theme(Theme::Light);

        assert_eq!(charts.batch.instance().data(), &data_before);
        assert_eq!(charts.batch.instance().revision(), revision + 1);
        assert_eq!(charts.support.instance().revision(), 1);
    }

    #[test]
    fn test_resize_only_updates_on_change() {
        let mut chart = ChartInstance::new(ChartKind::Bar, ChartData::default(), Theme::Dark);
        chart.resize(egui::vec2(100.0, 50.0));
        chart.resize(egui::vec2(100.0, 50.0));
        assert_eq!(chart.revision(), 1);
        assert_eq!(chart.size(), Some(egui::vec2(100.0, 50.0)));
    }
}
