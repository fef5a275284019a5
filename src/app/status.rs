//! Status orchestration methods
//!
//! Theme switching, backend health polling and the model ping diagnostic.

use std::time::Instant;

use crate::api::{ApiError, HealthStatus, PingResponse};
use crate::services::{ApiRequest, HealthPurpose};
use crate::storage::THEME_KEY;
use crate::App;

impl App {
    /// Flip the theme and remember the choice
    pub(crate) fn toggle_theme(&mut self) {
        let theme = self.model.ui.theme.toggled();
        self.model.ui.theme = theme;

        if let Err(e) = self.save_preference(THEME_KEY, theme.as_str()) {
            tracing::warn!("Could not persist theme: {:#}", e);
        }
    }

    pub(crate) fn refresh_health(&mut self) {
        self.last_health_poll = Instant::now();
        self.send(ApiRequest::Health {
            purpose: HealthPurpose::Poll,
        });
    }

    pub(crate) fn apply_health(&mut self, status: &HealthStatus) {
        if !status.ok {
            tracing::debug!(error = ?status.error, "Backend health check failed");
        }
        self.model.backend.apply_health(status);
    }

    pub(crate) fn ping_model(&mut self) {
        self.send(ApiRequest::Ping);
    }

    pub(crate) fn finish_ping(&mut self, result: Result<PingResponse, ApiError>) {
        match result {
            Ok(ping) => {
                let model = ping
                    .model
                    .or_else(|| self.model.backend.model_name.clone())
                    .unwrap_or_else(|| "—".to_string());
                self.model.show_toast(format!("Model {} responded", model));
            }
            Err(e) => self.model.show_error_toast(format!("Ping failed: {}", e)),
        }
    }
}
