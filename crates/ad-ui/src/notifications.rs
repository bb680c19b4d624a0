//! Transient toast notifications

use std::time::{Duration, Instant};

use egui::{Align2, Context, RichText};
use tracing::debug;

use crate::theme::{error_color, success_color};

/// Default lifetime of a notification
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created: Instant,
}

/// Queue of live notifications, oldest first
#[derive(Debug)]
pub struct Notifications {
    items: Vec<Notification>,
    duration: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(NOTIFICATION_DURATION)
    }
}

impl Notifications {
    pub fn new(duration: Duration) -> Self {
        Self {
            items: Vec::new(),
            duration,
        }
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    fn push_at(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        let message = message.into();
        debug!("Notification ({:?}): {}", kind, message);
        self.items.push(Notification {
            message,
            kind,
            created: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message);
    }

    /// Drop every notification older than the configured lifetime
    pub fn prune(&mut self, now: Instant) {
        let duration = self.duration;
        self.items
            .retain(|n| now.saturating_duration_since(n.created) < duration);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prune, then draw the remaining toasts in the top-right corner
    pub fn ui(&mut self, ctx: &Context) {
        self.prune(Instant::now());
        if self.items.is_empty() {
            return;
        }

        egui::Area::new("notifications")
            .anchor(Align2::RIGHT_TOP, egui::vec2(-16.0, 64.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for notification in &self.items {
                    let color = match notification.kind {
                        NotificationKind::Success => success_color(),
                        NotificationKind::Error => error_color(),
                    };
                    egui::Frame::popup(ui.style())
                        .stroke(egui::Stroke::new(1.0, color))
                        .show(ui, |ui| {
                            ui.label(RichText::new(&notification.message).color(color));
                        });
                    ui.add_space(6.0);
                }
            });

        // Keep repainting so toasts disappear on time
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_after_lifetime() {
        let start = Instant::now();
        let mut notifications = Notifications::new(Duration::from_secs(3));
        notifications.push_at(NotificationKind::Success, "PDF exported successfully!", start);
        notifications.push_at(NotificationKind::Error, "Error exporting PDF", start + Duration::from_secs(2));

        notifications.prune(start + Duration::from_millis(2_999));
        assert_eq!(notifications.items().len(), 2);

        notifications.prune(start + Duration::from_secs(3));
        assert_eq!(notifications.items().len(), 1);
        assert_eq!(notifications.items()[0].kind, NotificationKind::Error);

        notifications.prune(start + Duration::from_secs(5));
        assert!(notifications.is_empty());
    }
}
