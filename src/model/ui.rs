//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! theme, focus, dialogs, toasts, and the last drawn drop zone.

use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use super::types::{Focus, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    /// Failures, and advisories that stopped an action
    Error,
}

#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    pub theme: Theme,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Reset confirmation showing; nothing is sent until it is answered
    pub confirm_reset: bool,

    /// Toast message (text, kind, shown at)
    pub toast_message: Option<(String, ToastKind, Instant)>,

    pub toast_duration: Duration,

    // ============================================
    // VISUAL STATE
    // ============================================
    pub focus: Focus,

    /// Where the drop zone was last drawn, for pointer hit-testing
    pub drop_zone_area: Option<Rect>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(theme: Theme, toast_duration: Duration) -> Self {
        Self {
            theme,
            confirm_reset: false,
            toast_message: None,
            toast_duration,
            focus: Focus::Question,
            drop_zone_area: None,
            should_quit: false,
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some((message.into(), ToastKind::Info, Instant::now()));
    }

    pub fn show_error_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some((message.into(), ToastKind::Error, Instant::now()));
    }

    pub fn toast_text(&self) -> Option<&str> {
        self.toast_message.as_ref().map(|(m, _, _)| m.as_str())
    }

    pub fn toast_kind(&self) -> Option<ToastKind> {
        self.toast_message.as_ref().map(|(_, kind, _)| *kind)
    }

    pub fn should_dismiss_toast(&self, now: Instant) -> bool {
        if let Some((_, _, shown_at)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(
                now.saturating_duration_since(*shown_at).as_millis(),
                self.toast_duration.as_millis(),
            )
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    pub fn drop_zone_contains(&self, column: u16, row: u16) -> bool {
        self.drop_zone_area.is_some_and(|area| {
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let mut model = UiModel::new(Theme::Dark, Duration::from_millis(2200));
        assert!(model.toast_text().is_none());

        model.show_toast("Answer copied");
        assert_eq!(model.toast_text(), Some("Answer copied"));
        assert_eq!(model.toast_kind(), Some(ToastKind::Info));

        let shown_at = model.toast_message.as_ref().unwrap().2;
        assert!(!model.should_dismiss_toast(shown_at));
        assert!(model.should_dismiss_toast(shown_at + Duration::from_millis(2200)));

        model.dismiss_toast();
        assert!(model.toast_text().is_none());
    }

    #[test]
    fn test_error_toast_replaces_info() {
        let mut model = UiModel::new(Theme::Dark, Duration::from_millis(2200));
        model.show_toast("Answer copied");
        model.show_error_toast("Skipped 2 path(s)");
        assert_eq!(model.toast_text(), Some("Skipped 2 path(s)"));
        assert_eq!(model.toast_kind(), Some(ToastKind::Error));
    }

    #[test]
    fn test_drop_zone_hit_testing() {
        let mut model = UiModel::new(Theme::Dark, Duration::from_millis(2200));
        assert!(!model.drop_zone_contains(0, 0));

        model.drop_zone_area = Some(Rect::new(2, 3, 10, 5));
        assert!(model.drop_zone_contains(2, 3));
        assert!(model.drop_zone_contains(11, 7));
        assert!(!model.drop_zone_contains(12, 7));
        assert!(!model.drop_zone_contains(5, 8));
    }
}
