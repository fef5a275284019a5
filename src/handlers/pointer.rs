//! Mouse and paste handling for the drop zone
//!
//! Terminals have no drag-and-drop; moving the pointer over the zone stands
//! in for dragover, and a bracketed paste of paths stands in for the drop.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::logic::file::parse_dropped_paths;
use crate::messages::Command;
use crate::model::{Focus, Model};

pub fn map_mouse(model: &Model, mouse: MouseEvent) -> Vec<Command> {
    if model.has_modal() {
        return Vec::new();
    }

    let inside = model.ui.drop_zone_contains(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            if inside && !model.selection.drop_active {
                vec![Command::DragOver]
            } else if !inside && model.selection.drop_active {
                vec![Command::DragLeave]
            } else {
                Vec::new()
            }
        }
        MouseEventKind::Down(MouseButton::Left) if inside => vec![Command::ActivateDropZone],
        _ => Vec::new(),
    }
}

/// Pasted text becomes a drop while the zone is hot, otherwise typed text
pub fn map_paste(model: &Model, text: String) -> Vec<Command> {
    if model.selection.picker_open {
        return vec![Command::InsertText(text)];
    }
    if model.ui.confirm_reset {
        return Vec::new();
    }

    if model.selection.drop_active || model.ui.focus == Focus::DropZone {
        let paths = parse_dropped_paths(&text);
        if paths.is_empty() {
            return vec![Command::DragLeave];
        }
        return vec![Command::Drop(paths)];
    }

    vec![Command::InsertText(text)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Theme;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;
    use std::path::PathBuf;
    use std::time::Duration;

    fn model() -> Model {
        let mut model = Model::new(
            "http://localhost:5501".to_string(),
            Theme::Dark,
            5,
            Duration::from_millis(2200),
        );
        model.ui.drop_zone_area = Some(Rect::new(0, 3, 40, 5));
        model
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_hover_enters_and_leaves() {
        let mut model = model();
        assert_eq!(
            map_mouse(&model, mouse(MouseEventKind::Moved, 5, 4)),
            vec![Command::DragOver]
        );

        model.selection.drop_active = true;
        assert!(map_mouse(&model, mouse(MouseEventKind::Moved, 6, 4)).is_empty());
        assert_eq!(
            map_mouse(&model, mouse(MouseEventKind::Moved, 5, 20)),
            vec![Command::DragLeave]
        );
    }

    #[test]
    fn test_click_inside_activates() {
        let model = model();
        assert_eq!(
            map_mouse(&model, mouse(MouseEventKind::Down(MouseButton::Left), 1, 3)),
            vec![Command::ActivateDropZone]
        );
        assert!(map_mouse(&model, mouse(MouseEventKind::Down(MouseButton::Left), 1, 30)).is_empty());
    }

    #[test]
    fn test_paste_on_active_zone_drops() {
        let mut model = model();
        model.selection.drop_active = true;
        assert_eq!(
            map_paste(&model, "'/tmp/a b.txt' /tmp/c.pdf".to_string()),
            vec![Command::Drop(vec![
                PathBuf::from("/tmp/a b.txt"),
                PathBuf::from("/tmp/c.pdf"),
            ])]
        );
    }

    #[test]
    fn test_paste_into_question() {
        let model = model();
        assert_eq!(
            map_paste(&model, "what is it?".to_string()),
            vec![Command::InsertText("what is it?".to_string())]
        );
    }
}
