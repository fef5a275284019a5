//! App Orchestration
//!
//! The `App` owns the model plus its collaborators (request channel,
//! preference store, config-derived settings). Methods are kept as
//! `impl App` but organized by functional domain:
//!
//! - selection: file picker, drop zone, pending files
//! - knowledge: upload and reset
//! - ask: question, suggestions, topK
//! - answer: copy, clear, export
//! - status: theme, health, model ping
//! - input: focus and text entry

pub(crate) mod answer;
pub(crate) mod ask;
pub(crate) mod input;
pub(crate) mod knowledge;
pub(crate) mod selection;
pub(crate) mod status;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc::UnboundedSender;

use crate::config::Config;
use crate::messages::Command;
use crate::model::{Model, Theme};
use crate::services::{ApiRequest, ApiResponse};
use crate::storage::{Preferences, THEME_KEY};

pub struct App {
    pub model: Model,

    api_tx: UnboundedSender<ApiRequest>,
    prefs: Preferences,

    clipboard_command: Option<String>,
    export_dir: PathBuf,
    default_top_k: u32,

    health_interval: Duration,
    last_health_poll: Instant,
}

impl App {
    /// Build the controller. The stored theme is read here; a missing or
    /// unreadable preference falls back to dark.
    pub fn new(config: &Config, prefs: Preferences, api_tx: UnboundedSender<ApiRequest>) -> Self {
        let stored = prefs.get(THEME_KEY).unwrap_or_else(|e| {
            tracing::warn!("Could not read theme preference: {:#}", e);
            None
        });
        let theme = Theme::from_stored(stored.as_deref());

        let model = Model::new(
            config.base_url.clone(),
            theme,
            config.default_top_k,
            Duration::from_millis(config.toast_ms),
        );

        Self {
            model,
            api_tx,
            prefs,
            clipboard_command: config.clipboard_command.clone(),
            export_dir: config.export_dir(),
            default_top_k: config.default_top_k,
            health_interval: Duration::from_secs(config.health_interval_secs.max(1)),
            last_health_poll: Instant::now(),
        }
    }

    /// Override the theme for this session only (nothing is persisted)
    pub fn force_theme(&mut self, theme: Theme) {
        self.model.ui.theme = theme;
    }

    pub fn should_quit(&self) -> bool {
        self.model.ui.should_quit
    }

    /// Run one command against the model
    pub fn dispatch(&mut self, command: Command) {
        tracing::trace!(?command, "dispatch");
        match command {
            Command::ToggleTheme => self.toggle_theme(),
            Command::RefreshHealth => self.refresh_health(),
            Command::PingModel => self.ping_model(),

            Command::OpenFilePicker => self.open_file_picker(),
            Command::ClosePicker => self.close_file_picker(),
            Command::SubmitPicker => self.submit_picker(),
            Command::AddFiles(paths) => self.add_paths(&paths),
            Command::ClearSelection => self.clear_selection(),

            Command::DragOver => self.model.selection.drop_active = true,
            Command::DragLeave => self.model.selection.drop_active = false,
            Command::Drop(paths) => {
                self.model.selection.drop_active = false;
                self.add_paths(&paths);
            }
            Command::ActivateDropZone => self.open_file_picker(),

            Command::Upload => self.start_upload(),
            Command::RequestReset => self.model.ui.confirm_reset = true,
            Command::ConfirmReset => self.confirm_reset(),
            Command::CancelReset => self.model.ui.confirm_reset = false,

            Command::ToggleSuggestions => self.toggle_suggestions(),
            Command::PickSuggestion(index) => self.pick_suggestion(index),
            Command::Ask => self.ask(),
            Command::CopyAnswer => self.copy_answer(),
            Command::ClearAnswer => self.model.session.clear_answer(),
            Command::ExportSession => self.export_session(),

            Command::FocusNext => self.focus_next(),
            Command::InsertChar(c) => self.insert_text(&c.to_string()),
            Command::InsertText(text) => self.insert_text(&text),
            Command::Backspace => self.backspace(),
            Command::StepTopK(delta) => self.step_top_k(delta),
            Command::Dismiss => self.dismiss(),
            Command::Quit => self.model.ui.should_quit = true,
        }
    }

    /// Apply a response from the background API service
    pub fn handle_api_response(&mut self, response: ApiResponse) {
        crate::handlers::handle_api_response(self, response);
    }

    /// Time-driven housekeeping: toast expiry, progress linger, health timer
    pub fn tick(&mut self, now: Instant) {
        if self.model.ui.should_dismiss_toast(now) {
            self.model.ui.dismiss_toast();
        }

        self.model.session.progress = self.model.session.progress.tick(now);

        if now.duration_since(self.last_health_poll) >= self.health_interval {
            self.refresh_health();
        }
    }

    pub(crate) fn send(&self, request: ApiRequest) {
        if let Err(e) = self.api_tx.send(request) {
            tracing::error!("API service unavailable, dropped request: {:?}", e.0);
        }
    }

    pub(crate) fn save_preference(&self, key: &str, value: &str) -> Result<()> {
        self.prefs.set(key, value)
    }
}
