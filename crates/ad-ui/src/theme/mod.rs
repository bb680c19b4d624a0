use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

use ad_core::Theme;

/// Colours of one dashboard theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub panel: Color32,
    pub widget: Color32,
    pub hover: Color32,
    pub active: Color32,
    pub border: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color32::from_rgb(23, 23, 23),
                panel: Color32::from_rgb(31, 31, 31),
                widget: Color32::from_rgb(40, 40, 40),
                hover: Color32::from_rgb(50, 50, 50),
                active: Color32::from_rgb(60, 60, 60),
                border: Color32::from_rgb(70, 70, 70),
                text: Color32::from_rgb(220, 220, 220),
                text_secondary: Color32::from_rgb(176, 176, 176),
            },
            Theme::Light => Self {
                background: Color32::from_rgb(252, 252, 249),
                panel: Color32::WHITE,
                widget: Color32::from_rgb(241, 245, 249),
                hover: Color32::from_rgb(226, 232, 240),
                active: Color32::from_rgb(203, 213, 225),
                border: Color32::from_rgb(203, 213, 225),
                text: Color32::from_rgb(19, 52, 59),
                text_secondary: Color32::from_rgb(71, 85, 105),
            },
        }
    }
}

/// Apply the dashboard theme to the egui context
pub fn apply_theme(ctx: &Context, theme: Theme) {
    let palette = Palette::for_theme(theme);
    let mut style = Style::default();
    let mut visuals = if theme.is_dark() { Visuals::dark() } else { Visuals::light() };

    let accent = accent_color();

    // Window and panel styling
    visuals.window_fill = palette.panel;
    visuals.panel_fill = palette.background;
    visuals.extreme_bg_color = palette.panel;
    visuals.faint_bg_color = palette.widget;

    // Widget styling
    visuals.widgets.noninteractive.bg_fill = palette.widget;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.border);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.widgets.noninteractive.rounding = Rounding::same(6.0);

    visuals.widgets.inactive.bg_fill = palette.widget;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, palette.border);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.widgets.inactive.rounding = Rounding::same(6.0);

    visuals.widgets.hovered.bg_fill = palette.hover;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, accent);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);

    visuals.widgets.active.bg_fill = palette.active;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.widgets.active.rounding = Rounding::same(6.0);

    visuals.selection.bg_fill = accent.linear_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;

    visuals.window_shadow.extrusion = 8.0;
    visuals.popup_shadow.extrusion = 4.0;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    style.visuals = visuals;
    ctx.set_style(style);
}

/// Teal accent shared by both themes
pub fn accent_color() -> Color32 {
    Color32::from_rgb(33, 128, 141)
}

pub fn error_color() -> Color32 {
    Color32::from_rgb(239, 68, 68)
}

pub fn success_color() -> Color32 {
    Color32::from_rgb(16, 185, 129)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_per_theme() {
        assert_ne!(Palette::for_theme(Theme::Dark), Palette::for_theme(Theme::Light));
        assert_eq!(Palette::for_theme(Theme::Dark.toggled().toggled()), Palette::for_theme(Theme::Dark));
    }

    #[test]
    fn test_apply_theme_sets_dark_mode() {
        let ctx = Context::default();
        apply_theme(&ctx, Theme::Light);
        assert!(!ctx.style().visuals.dark_mode);
        apply_theme(&ctx, Theme::Dark);
        assert!(ctx.style().visuals.dark_mode);
    }
}
