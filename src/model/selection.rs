//! Selection Model
//!
//! Files chosen for upload, the file-picker prompt, and the drop zone's
//! visual state.

use super::types::{PendingFile, PendingFileSet};

#[derive(Clone, Debug, Default)]
pub struct SelectionModel {
    pub pending: PendingFileSet,

    /// Text value of the file picker (a path or glob pattern)
    pub picker_value: String,

    /// Whether the picker prompt is open
    pub picker_open: bool,

    /// Drop zone highlighted (pointer hovering with something to drop)
    pub drop_active: bool,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_files(&mut self, files: Vec<PendingFile>) -> usize {
        self.pending.add(files)
    }

    /// Empty the pending set and reset the picker's value
    pub fn clear(&mut self) {
        self.pending.clear();
        self.picker_value.clear();
    }
}
