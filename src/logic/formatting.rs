//! Formatting and display logic
//!
//! Pure functions that turn backend results into the text lines the UI
//! and the HTML export show. Output here is plain text; escaping happens
//! at the boundary that consumes it.

use serde_json::Value;

use crate::api::{Citation, UploadFileResult};
use crate::model::types::{PendingFile, UploadStatus};

use super::file::{file_badge, size_kb};

/// Colour hint for a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    Ok,
    Err,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: LineKind,
    pub text: String,
}

impl StatusLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Render a citation as `[#id • source • score S]`
///
/// # Examples
/// ```
/// use docqa::api::Citation;
/// use docqa::logic::formatting::format_citation;
///
/// let c = Citation { id: 3, source: "a.txt".to_string(), score: 0.873 };
/// assert_eq!(format_citation(&c), "[#3 • a.txt • score 0.873]");
/// ```
pub fn format_citation(citation: &Citation) -> String {
    format!(
        "[#{} • {} • score {}]",
        citation.id, citation.source, citation.score
    )
}

pub fn format_citations(citations: &[Citation]) -> String {
    citations
        .iter()
        .map(format_citation)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strings stay raw; anything else is shown as JSON
fn error_value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn upload_result_line(result: &UploadFileResult) -> StatusLine {
    match result {
        UploadFileResult::Added { file, chunks_added } => {
            StatusLine::new(LineKind::Ok, format!("• {} — chunks: {}", file, chunks_added))
        }
        UploadFileResult::Failed { file, error } => StatusLine::new(
            LineKind::Err,
            format!("• {} — ERROR: {}", file, error_value_text(error)),
        ),
    }
}

/// Lines for the upload status area
pub fn upload_status_lines(status: &UploadStatus) -> Vec<StatusLine> {
    match status {
        UploadStatus::Empty => Vec::new(),
        UploadStatus::Indexed {
            results,
            total_chunks,
        } => {
            let mut lines = vec![StatusLine::new(LineKind::Plain, "Indexed:")];
            lines.extend(results.iter().map(upload_result_line));
            let total = total_chunks
                .map(|n| n.to_string())
                .unwrap_or_else(|| "—".to_string());
            lines.push(StatusLine::new(LineKind::Plain, format!("Total chunks: {}", total)));
            lines
        }
        UploadStatus::Failed(error) => {
            let mut lines = vec![StatusLine::new(LineKind::Err, format!("Error: {}", error))];
            if let Some(details) = error.details_json() {
                lines.push(StatusLine::new(LineKind::Muted, details));
            }
            lines
        }
        UploadStatus::Cleared {
            message,
            files_removed,
        } => {
            let message = message.as_deref().unwrap_or("Knowledge base cleared.");
            let removed = files_removed
                .map(|n| n.to_string())
                .unwrap_or_else(|| "—".to_string());
            vec![
                StatusLine::new(LineKind::Ok, format!("✅ {}", message)),
                StatusLine::new(LineKind::Muted, format!("Files removed: {}", removed)),
            ]
        }
    }
}

/// (badge, name, size) for one row of the pending list
pub fn pending_file_columns(file: &PendingFile) -> (String, String, String) {
    (
        file_badge(&file.name),
        file.name.clone(),
        format!("({} KB)", size_kb(file.size)),
    )
}
