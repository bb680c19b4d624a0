use std::time::{Duration, Instant};

use egui::{Context, RichText};

/// Full-screen loading indicator with a one-shot delayed hide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingIndicator {
    visible: bool,
    hide_at: Option<Instant>,
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingIndicator {
    /// Starts out visible
    pub fn new() -> Self {
        Self {
            visible: true,
            hide_at: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide once `delay` has passed since `now`
    pub fn hide_after(&mut self, now: Instant, delay: Duration) {
        if self.visible && self.hide_at.is_none() {
            self.hide_at = Some(now + delay);
        }
    }

    pub fn hide_now(&mut self) {
        self.visible = false;
        self.hide_at = None;
    }

    /// Advance the timer. Returns true when the indicator was hidden by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide_now();
                true
            }
            _ => false,
        }
    }

    pub fn ui(&mut self, ctx: &Context) {
        let now = Instant::now();
        self.tick(now);
        if !self.visible {
            return;
        }

        egui::Area::new("loading_overlay")
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add(egui::Spinner::new().size(32.0));
                        ui.label(RichText::new("Loading alumni data...").strong());
                    });
                });
            });

        match self.hide_at {
            Some(deadline) => ctx.request_repaint_after(deadline.saturating_duration_since(now)),
            None => ctx.request_repaint_after(Duration::from_millis(100)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_hide() {
        let start = Instant::now();
        let mut indicator = LoadingIndicator::new();
        assert!(indicator.is_visible());

        indicator.hide_after(start, Duration::from_millis(1000));
        // A second schedule does not push the deadline out
        indicator.hide_after(start + Duration::from_millis(900), Duration::from_millis(1000));

        assert!(!indicator.tick(start + Duration::from_millis(999)));
        assert!(indicator.is_visible());
        assert!(indicator.tick(start + Duration::from_millis(1000)));
        assert!(!indicator.is_visible());
        assert!(!indicator.tick(start + Duration::from_millis(2000)));
    }

    #[test]
    fn test_hide_now() {
        let mut indicator = LoadingIndicator::new();
        indicator.hide_now();
        assert!(!indicator.is_visible());
    }
}
