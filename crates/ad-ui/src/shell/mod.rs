use egui::{Color32, Context, Key, Order, RichText, Sense, TopBottomPanel};
use tracing::debug;

use ad_core::Theme;

use crate::theme::{accent_color, error_color};

/// Something the user asked for from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    ToggleTheme,
    Export,
    OpenNavigation,
}

/// Render the dashboard header
pub fn header(ctx: &Context, theme: Theme, export_enabled: bool) -> Option<HeaderAction> {
    let mut action = None;

    TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("☰").on_hover_text("Navigation").clicked() {
                action = Some(HeaderAction::OpenNavigation);
            }
            ui.heading(RichText::new("Alumni Dashboard").color(accent_color()));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(export_enabled, egui::Button::new("Export PDF"))
                    .on_hover_text("Export a PDF report of the current view")
                    .clicked()
                {
                    action = Some(HeaderAction::Export);
                }
                ui.separator();

                if theme_switch(ui, theme) {
                    action = Some(HeaderAction::ToggleTheme);
                }
            });
        });
        ui.add_space(4.0);
    });

    action
}

/// "Dark [switch] Light"; the switch and both labels toggle. Laid out right to left.
fn theme_switch(ui: &mut egui::Ui, theme: Theme) -> bool {
    let light = ui
        .add(egui::Label::new(theme_label("Light", !theme.is_dark())).sense(Sense::click()))
        .clicked();
    let mut is_light = !theme.is_dark();
    let switch = ui.checkbox(&mut is_light, "").clicked();
    let dark = ui
        .add(egui::Label::new(theme_label("Dark", theme.is_dark())).sense(Sense::click()))
        .clicked();

    light || switch || dark
}

fn theme_label(text: &str, active: bool) -> RichText {
    let text = RichText::new(text);
    if active {
        text.strong().color(accent_color())
    } else {
        text.weak()
    }
}

/// Persistent error banner
pub fn error_banner(ui: &mut egui::Ui, message: &str) {
    egui::Frame::none()
        .fill(error_color().linear_multiply(0.2))
        .stroke(egui::Stroke::new(1.0, error_color()))
        .rounding(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚠").color(error_color()));
                ui.label(message);
            });
        });
}

/// Sections reachable from the navigation overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Overview,
    Charts,
    States,
    Directory,
}

impl NavSection {
    pub const ALL: [NavSection; 4] = [
        NavSection::Overview,
        NavSection::Charts,
        NavSection::States,
        NavSection::Directory,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Overview => "Overview",
            NavSection::Charts => "Charts",
            NavSection::States => "State Distribution",
            NavSection::Directory => "Alumni Directory",
        }
    }
}

/// Input that can open or close the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Open,
    CloseButton,
    ClickOutside,
    Escape,
    Navigate(NavSection),
}

/// Slide-in navigation overlay
#[derive(Debug, Default)]
pub struct NavOverlay {
    open: bool,
}

impl NavOverlay {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply one event. Returns the section to scroll to, if any.
    pub fn handle(&mut self, event: NavEvent) -> Option<NavSection> {
        debug!("Navigation overlay: {:?}", event);
        match event {
            NavEvent::Open => {
                self.open = true;
                None
            }
            NavEvent::CloseButton | NavEvent::ClickOutside | NavEvent::Escape => {
                self.open = false;
                None
            }
            NavEvent::Navigate(section) => {
                self.open = false;
                Some(section)
            }
        }
    }

    /// Draw the overlay when open. Returns the section picked, if any.
    pub fn ui(&mut self, ctx: &Context) -> Option<NavSection> {
        if !self.open {
            return None;
        }

        let mut event = None;

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            event = Some(NavEvent::Escape);
        }

        let screen = ctx.screen_rect();

        let backdrop = egui::Area::new("nav_backdrop")
            .fixed_pos(screen.min)
            .order(Order::Middle)
            .show(ctx, |ui| {
                let (rect, response) = ui.allocate_exact_size(screen.size(), Sense::click());
                ui.painter().rect_filled(rect, 0.0, Color32::from_black_alpha(120));
                response
            })
            .inner;
        if backdrop.clicked() {
            event = Some(NavEvent::ClickOutside);
        }

        egui::Area::new("nav_panel")
            .fixed_pos(screen.min)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_width(260.0);
                    ui.set_min_height(screen.height() - 16.0);

                    ui.horizontal(|ui| {
                        ui.heading("Navigate");
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("✕").on_hover_text("Close").clicked() {
                                event = Some(NavEvent::CloseButton);
                            }
                        });
                    });
                    ui.separator();

                    for section in NavSection::ALL {
                        if ui.selectable_label(false, section.label()).clicked() {
                            event = Some(NavEvent::Navigate(section));
                        }
                    }
                });
            });

        event.and_then(|e| self.handle(e))
    }
}
