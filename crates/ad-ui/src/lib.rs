//! User interface shell for the alumni dashboard
//!
//! Header, loading indicator, error banner, navigation overlay, toast
//! notifications and the egui theme.

pub mod loading;
pub mod notifications;
pub mod shell;
pub mod theme;

use std::time::Duration;

pub use loading::LoadingIndicator;
pub use notifications::{Notification, NotificationKind, Notifications};
pub use shell::{error_banner, header, HeaderAction, NavEvent, NavOverlay, NavSection};
pub use theme::apply_theme;

/// Banner text shown when the dataset cannot be loaded
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load alumni data";

/// UI state that persists across frames
#[derive(Debug, Default)]
pub struct UiState {
    pub loading: LoadingIndicator,
    pub notifications: Notifications,
    pub navigation: NavOverlay,

    /// Persistent banner; set once when the load fails
    pub load_error: Option<String>,

    /// Section to bring into view on the next frame
    pub scroll_target: Option<NavSection>,
}

impl UiState {
    pub fn new(notification_duration: Duration) -> Self {
        Self {
            notifications: Notifications::new(notification_duration),
            ..Default::default()
        }
    }

    /// Load failed: hide the spinner and keep the banner up
    pub fn show_load_error(&mut self) {
        self.loading.hide_now();
        self.load_error = Some(LOAD_ERROR_MESSAGE.to_string());
    }
}
