//! Selection orchestration methods
//!
//! Methods for building the set of files to upload:
//! - File picker prompt (path or glob pattern)
//! - Paths dropped or pasted onto the drop zone
//! - Clearing the selection

use std::path::PathBuf;

use crate::model::PendingFile;
use crate::{logic, App};

impl App {
    pub(crate) fn open_file_picker(&mut self) {
        self.model.selection.picker_open = true;
    }

    /// Close the prompt; its value is kept until the selection is cleared
    pub(crate) fn close_file_picker(&mut self) {
        self.model.selection.picker_open = false;
    }

    pub(crate) fn submit_picker(&mut self) {
        let input = self.model.selection.picker_value.trim().to_string();
        if input.is_empty() {
            self.model.show_error_toast("Enter a path or pattern");
            return;
        }

        let paths = logic::file::expand_selection(&input);
        self.model.selection.picker_open = false;

        if paths.is_empty() {
            self.model.show_error_toast(format!("No files match {}", input));
            return;
        }
        self.add_paths(&paths);
    }

    /// Stat each path and add the regular files; everything else is skipped
    pub(crate) fn add_paths(&mut self, paths: &[PathBuf]) {
        let mut files = Vec::with_capacity(paths.len());
        let mut skipped = 0;

        for path in paths {
            match PendingFile::from_path(path) {
                Ok(file) => files.push(file),
                Err(e) => {
                    tracing::debug!("Skipping {}: {:#}", path.display(), e);
                    skipped += 1;
                }
            }
        }

        let added = self.model.selection.add_files(files);
        tracing::debug!(added, skipped, "Files added to selection");

        if skipped > 0 {
            self.model.show_error_toast(format!("Skipped {} path(s)", skipped));
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        self.model.selection.clear();
    }
}
