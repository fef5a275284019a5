//! Application Model
//!
//! Pure, cloneable controller state, split into focused sub-models:
//!
//! - **BackendModel**: server state, chunk count, model name
//! - **SelectionModel**: pending files, file picker, drop zone
//! - **SessionModel**: question, answer, citations, suggestions, upload status
//! - **UiModel**: theme, focus, dialogs, toasts
//!
//! No services live here; all I/O goes through the App.

pub mod backend;
pub mod selection;
pub mod session;
pub mod types;
pub mod ui;

pub use backend::BackendModel;
pub use selection::SelectionModel;
pub use session::SessionModel;
pub use types::*;
pub use ui::{ToastKind, UiModel};

use std::time::Duration;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub backend: BackendModel,
    pub selection: SelectionModel,
    pub session: SessionModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(base_url: String, theme: Theme, default_top_k: u32, toast_duration: Duration) -> Self {
        Self {
            backend: BackendModel::new(base_url),
            selection: SelectionModel::new(),
            session: SessionModel::new(default_top_k),
            ui: UiModel::new(theme, toast_duration),
        }
    }

    /// Any modal that swallows keys (picker or reset dialog)
    pub fn has_modal(&self) -> bool {
        self.selection.picker_open || self.ui.confirm_reset
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.ui.show_toast(message);
    }

    pub fn show_error_toast(&mut self, message: impl Into<String>) {
        self.ui.show_error_toast(message);
    }
}
