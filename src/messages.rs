//! Commands understood by the controller
//!
//! Every user action arrives as a `Command`. Input handlers translate
//! terminal events into commands; tests can dispatch them directly.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // ============================================
    // THEME & STATUS
    // ============================================
    ToggleTheme,
    RefreshHealth,
    PingModel,

    // ============================================
    // FILE SELECTION
    // ============================================
    /// Open the file picker prompt
    OpenFilePicker,
    ClosePicker,
    /// Expand the picker's value and add the matching files
    SubmitPicker,
    AddFiles(Vec<PathBuf>),
    ClearSelection,

    // ============================================
    // DROP ZONE
    // ============================================
    DragOver,
    DragLeave,
    Drop(Vec<PathBuf>),
    /// Click or Enter/Space on the drop zone
    ActivateDropZone,

    // ============================================
    // KNOWLEDGE BASE
    // ============================================
    Upload,
    /// Ask for confirmation; nothing is sent yet
    RequestReset,
    ConfirmReset,
    CancelReset,

    // ============================================
    // QUESTIONS & ANSWERS
    // ============================================
    ToggleSuggestions,
    PickSuggestion(usize),
    Ask,
    CopyAnswer,
    ClearAnswer,
    ExportSession,

    // ============================================
    // TEXT ENTRY & FOCUS
    // ============================================
    FocusNext,
    InsertChar(char),
    InsertText(String),
    Backspace,
    StepTopK(i32),
    /// Close whatever transient panel is open
    Dismiss,

    Quit,
}
