//! Session Model
//!
//! Question input, answer and citations, suggestions, and the upload
//! status area.

use super::types::{ProgressState, UploadStatus};
use crate::api::Citation;

/// Shown in the answer pane when there is nothing to show
pub const NO_ANSWER: &str = "—";

pub const THINKING: &str = "Thinking…";

#[derive(Clone, Debug)]
pub struct SessionModel {
    pub question: String,

    /// Raw text of the topK input; parsed when asking
    pub top_k_input: String,

    pub answer: String,

    pub citations: Vec<Citation>,

    /// Whether the citation panel is expanded
    pub citations_open: bool,

    /// Question the current answer belongs to
    pub last_question: Option<String>,

    pub suggestions: Vec<String>,
    pub suggestions_visible: bool,
    pub selected_suggestion: Option<usize>,

    pub upload_status: UploadStatus,
    pub progress: ProgressState,
}

impl SessionModel {
    pub fn new(default_top_k: u32) -> Self {
        Self {
            question: String::new(),
            top_k_input: default_top_k.to_string(),
            answer: NO_ANSWER.to_string(),
            citations: Vec::new(),
            citations_open: false,
            last_question: None,
            suggestions: Vec::new(),
            suggestions_visible: false,
            selected_suggestion: None,
            upload_status: UploadStatus::Empty,
            progress: ProgressState::Hidden,
        }
    }

    /// Reset answer and citations; the knowledge base is untouched
    pub fn clear_answer(&mut self) {
        self.answer = NO_ANSWER.to_string();
        self.citations.clear();
        self.citations_open = false;
    }

    pub fn has_answer(&self) -> bool {
        self.answer != NO_ANSWER && self.answer != THINKING
    }
}
