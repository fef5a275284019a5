//! Keyboard Input Handler
//!
//! Maps key presses to commands. Modal prompts are handled first and swallow
//! every other key while shown.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::messages::Command;
use crate::model::{Focus, Model};

/// Translate a key press into the commands it triggers
pub fn map_key(model: &Model, key: KeyEvent) -> Vec<Command> {
    if key.kind == KeyEventKind::Release {
        return Vec::new();
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C always quits, even from a dialog
    if ctrl && matches!(key.code, KeyCode::Char('c')) {
        return vec![Command::Quit];
    }

    if model.ui.confirm_reset {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => vec![Command::ConfirmReset],
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => vec![Command::CancelReset],
            _ => Vec::new(),
        };
    }

    if model.selection.picker_open {
        return match key.code {
            KeyCode::Enter => vec![Command::SubmitPicker],
            KeyCode::Esc => vec![Command::ClosePicker],
            KeyCode::Backspace => vec![Command::Backspace],
            KeyCode::Char(c) if !ctrl => vec![Command::InsertChar(c)],
            _ => Vec::new(),
        };
    }

    if ctrl {
        return match key.code {
            KeyCode::Char('q') => vec![Command::Quit],
            KeyCode::Char('t') => vec![Command::ToggleTheme],
            KeyCode::Char('o') => vec![Command::OpenFilePicker],
            KeyCode::Char('u') => vec![Command::Upload],
            KeyCode::Char('l') => vec![Command::ClearSelection],
            KeyCode::Char('g') => vec![Command::ToggleSuggestions],
            KeyCode::Char('n') => next_suggestion(model).into_iter().collect(),
            KeyCode::Char('r') => vec![Command::RequestReset],
            KeyCode::Char('y') => vec![Command::CopyAnswer],
            KeyCode::Char('k') => vec![Command::ClearAnswer],
            KeyCode::Char('e') => vec![Command::ExportSession],
            KeyCode::Char('p') => vec![Command::PingModel],
            _ => Vec::new(),
        };
    }

    let focus = model.ui.focus;
    match key.code {
        KeyCode::F(5) => vec![Command::RefreshHealth],
        KeyCode::Tab => vec![Command::FocusNext],
        KeyCode::Esc => vec![Command::Dismiss],
        KeyCode::Enter => match focus {
            Focus::DropZone => vec![Command::ActivateDropZone],
            Focus::Question | Focus::TopK => vec![Command::Ask],
            Focus::Answer => Vec::new(),
        },
        KeyCode::Up if focus == Focus::TopK => vec![Command::StepTopK(1)],
        KeyCode::Down if focus == Focus::TopK => vec![Command::StepTopK(-1)],
        KeyCode::Backspace => vec![Command::Backspace],
        KeyCode::Char(' ') if focus == Focus::DropZone => vec![Command::ActivateDropZone],
        KeyCode::Char('q') if !is_text_input(focus) => vec![Command::Quit],
        KeyCode::Char(c) if is_text_input(focus) => vec![Command::InsertChar(c)],
        _ => Vec::new(),
    }
}

fn is_text_input(focus: Focus) -> bool {
    matches!(focus, Focus::Question | Focus::TopK)
}

/// Cycle through the suggestion chips, filling the question with each
fn next_suggestion(model: &Model) -> Option<Command> {
    let session = &model.session;
    if !session.suggestions_visible || session.suggestions.is_empty() {
        return None;
    }
    let next = match session.selected_suggestion {
        Some(i) => (i + 1) % session.suggestions.len(),
        None => 0,
    };
    Some(Command::PickSuggestion(next))
}
