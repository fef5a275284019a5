//! Knowledge base orchestration methods
//!
//! Uploading pending files for indexing, and the confirmed reset that wipes
//! every indexed chunk.

use std::time::Instant;

use crate::api::{ApiError, ResetResponse, UploadResponse};
use crate::model::{ProgressState, UploadStatus};
use crate::services::ApiRequest;
use crate::App;

impl App {
    pub(crate) fn start_upload(&mut self) {
        if self.model.selection.pending.is_empty() {
            self.model.show_error_toast("Choose or drop at least one file");
            return;
        }

        let files = self.model.selection.pending.to_vec();
        tracing::info!("Uploading {} file(s)", files.len());

        self.model.session.upload_status = UploadStatus::Empty;
        self.model.session.progress = ProgressState::set(10);
        self.send(ApiRequest::Upload { files });
    }

    pub(crate) fn finish_upload(&mut self, result: Result<UploadResponse, ApiError>, now: Instant) {
        match result {
            Ok(response) => {
                self.model.session.upload_status = UploadStatus::Indexed {
                    results: response.results,
                    total_chunks: response.chunks,
                };
                self.model.session.progress = ProgressState::complete(now);
                self.model.selection.clear();
                self.refresh_health();
                self.model.show_toast("Upload & indexing complete");
            }
            Err(e) => {
                tracing::warn!("Upload failed: {}", e);
                self.model.session.upload_status = UploadStatus::Failed(e);
                self.model.session.progress = ProgressState::Hidden;
            }
        }
    }

    pub(crate) fn confirm_reset(&mut self) {
        if !self.model.ui.confirm_reset {
            return;
        }
        self.model.ui.confirm_reset = false;
        self.send(ApiRequest::Reset);
    }

    pub(crate) fn finish_reset(&mut self, result: Result<ResetResponse, ApiError>) {
        match result {
            Ok(response) => {
                self.model.session.upload_status = UploadStatus::Cleared {
                    message: response.message,
                    files_removed: response.files_removed,
                };
                self.model.session.clear_answer();
                self.model.selection.clear();
                self.refresh_health();
                self.model.show_toast("All documents and chunks removed");
            }
            Err(e) => {
                tracing::warn!("Reset failed: {}", e);
                self.model.show_error_toast("Reset failed");
            }
        }
    }
}
