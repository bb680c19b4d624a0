//! Theme-derived chart colours

use egui::Color32;

use ad_core::Theme;

/// Axis, legend and border colours applied to every chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    pub grid_color: Color32,
    pub tick_color: Color32,
    pub legend_color: Color32,
    /// Separator between doughnut segments
    pub border_color: Color32,
}

impl ChartStyle {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                grid_color: Color32::from_rgb(51, 51, 51),
                tick_color: Color32::from_rgb(176, 176, 176),
                legend_color: Color32::from_rgb(176, 176, 176),
                border_color: Color32::from_rgb(26, 26, 26),
            },
            Theme::Light => Self {
                grid_color: Color32::from_rgb(229, 229, 229),
                tick_color: Color32::from_rgb(71, 85, 105),
                legend_color: Color32::from_rgb(71, 85, 105),
                border_color: Color32::WHITE,
            },
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::for_theme(Theme::Dark)
    }
}
