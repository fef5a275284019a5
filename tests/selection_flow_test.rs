//! Integration tests for building the upload selection
//!
//! Files reach the pending set three ways: the picker prompt (path or glob),
//! a paste onto the drop zone, and direct AddFiles commands.

mod common;

use common::test_app;
use crossterm::event::Event;
use docqa::handlers::map_event;
use docqa::model::ToastKind;
use docqa::Command;
use std::fs;

#[test]
fn test_same_file_twice_is_one_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "hello").unwrap();

    let (mut app, _rx) = test_app();
    app.dispatch(Command::AddFiles(vec![path.clone()]));
    app.dispatch(Command::AddFiles(vec![path]));

    assert_eq!(app.model.selection.pending.len(), 1);
}

#[test]
fn test_clear_selection_resets_picker_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "hello").unwrap();

    let (mut app, _rx) = test_app();
    app.dispatch(Command::OpenFilePicker);
    app.dispatch(Command::InsertText(path.display().to_string()));
    app.dispatch(Command::SubmitPicker);

    assert!(!app.model.selection.picker_open);
    assert_eq!(app.model.selection.pending.len(), 1);
    assert!(!app.model.selection.picker_value.is_empty());

    app.dispatch(Command::ClearSelection);
    assert!(app.model.selection.pending.is_empty());
    assert!(app.model.selection.picker_value.is_empty());
}

#[test]
fn test_picker_expands_glob() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("one.pdf"), "1").unwrap();
    fs::write(dir.path().join("two.pdf"), "2").unwrap();
    fs::write(dir.path().join("notes.txt"), "3").unwrap();

    let (mut app, _rx) = test_app();
    app.dispatch(Command::OpenFilePicker);
    app.dispatch(Command::InsertText(format!("{}/*.pdf", dir.path().display())));
    app.dispatch(Command::SubmitPicker);

    let names: Vec<_> = app
        .model
        .selection
        .pending
        .iter()
        .map(|f| f.name.clone())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.iter().all(|n| n.ends_with(".pdf")));
}

#[test]
fn test_picker_without_matches_toasts() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = test_app();
    app.dispatch(Command::OpenFilePicker);
    app.dispatch(Command::InsertText(format!("{}/*.docx", dir.path().display())));
    app.dispatch(Command::SubmitPicker);

    assert!(app.model.selection.pending.is_empty());
    assert!(app.model.ui.toast_text().unwrap().starts_with("No files match"));
    assert_eq!(app.model.ui.toast_kind(), Some(ToastKind::Error));
}

#[test]
fn test_directories_and_missing_paths_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.txt");
    fs::write(&file, "x").unwrap();

    let (mut app, _rx) = test_app();
    app.dispatch(Command::AddFiles(vec![
        file,
        dir.path().to_path_buf(),
        dir.path().join("missing.txt"),
    ]));

    assert_eq!(app.model.selection.pending.len(), 1);
    assert_eq!(app.model.ui.toast_text(), Some("Skipped 2 path(s)"));
    assert_eq!(app.model.ui.toast_kind(), Some(ToastKind::Error));
}

#[test]
fn test_paste_onto_active_drop_zone_adds_files() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("my report.pdf");
    fs::write(&file, "pdf").unwrap();

    let (mut app, _rx) = test_app();
    app.dispatch(Command::DragOver);
    assert!(app.model.selection.drop_active);

    let pasted = format!("'{}'", file.display());
    for command in map_event(&app.model, Event::Paste(pasted)) {
        app.dispatch(command);
    }

    assert!(!app.model.selection.drop_active);
    assert_eq!(app.model.selection.pending.len(), 1);
    assert_eq!(app.model.selection.pending.iter().next().unwrap().name, "my report.pdf");
}

#[test]
fn test_drag_leave_clears_highlight() {
    let (mut app, _rx) = test_app();
    app.dispatch(Command::DragOver);
    app.dispatch(Command::DragLeave);
    assert!(!app.model.selection.drop_active);
}

#[test]
fn test_activate_drop_zone_opens_picker() {
    let (mut app, _rx) = test_app();
    app.dispatch(Command::ActivateDropZone);
    assert!(app.model.selection.picker_open);

    app.dispatch(Command::ClosePicker);
    assert!(!app.model.selection.picker_open);
}
