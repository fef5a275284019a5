//! Integration tests for upload and reset
//!
//! Upload and reset both change the knowledge base, so both end with a
//! health refresh on success.

mod common;

use common::{drain, test_app};
use docqa::api::{ApiError, ResetResponse, UploadFileResult, UploadResponse};
use docqa::logic::formatting::upload_status_lines;
use docqa::model::{ProgressState, UploadStatus};
use docqa::services::{ApiRequest, ApiResponse, HealthPurpose};
use docqa::Command;
use serde_json::json;
use std::fs;
use std::time::{Duration, Instant};

fn texts(status: &UploadStatus) -> Vec<String> {
    upload_status_lines(status).into_iter().map(|l| l.text).collect()
}

#[test]
fn test_upload_requires_files() {
    let (mut app, mut rx) = test_app();
    app.dispatch(Command::Upload);

    assert!(drain(&mut rx).is_empty());
    assert_eq!(app.model.ui.toast_text(), Some("Choose or drop at least one file"));
    assert_eq!(app.model.session.progress, ProgressState::Hidden);
}

#[test]
fn test_upload_success() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "alpha").unwrap();

    let (mut app, mut rx) = test_app();
    app.dispatch(Command::AddFiles(vec![path]));
    app.dispatch(Command::Upload);

    assert_eq!(app.model.session.progress.percent(), Some(10));
    match drain(&mut rx).as_slice() {
        [ApiRequest::Upload { files }] => assert_eq!(files[0].name, "a.txt"),
        other => panic!("unexpected requests: {:?}", other),
    }

    let response: UploadResponse = serde_json::from_value(json!({
        "ok": true,
        "results": [{"file": "a.txt", "chunksAdded": 3}],
        "chunks": 3
    }))
    .unwrap();
    app.handle_api_response(ApiResponse::Upload { result: Ok(response) });

    let lines = texts(&app.model.session.upload_status);
    assert_eq!(lines[0], "Indexed:");
    assert!(lines.iter().any(|l| l.contains("a.txt") && l.contains("chunks: 3")));
    assert_eq!(lines.last().unwrap(), "Total chunks: 3");

    assert!(app.model.selection.pending.is_empty());
    assert_eq!(app.model.session.progress.percent(), Some(100));
    assert_eq!(app.model.ui.toast_text(), Some("Upload & indexing complete"));
    assert_eq!(
        drain(&mut rx),
        vec![ApiRequest::Health {
            purpose: HealthPurpose::Poll
        }]
    );

    // progress lingers, then hides
    app.tick(Instant::now() + Duration::from_millis(700));
    assert_eq!(app.model.session.progress, ProgressState::Hidden);
}

#[test]
fn test_upload_with_per_file_error() {
    let (mut app, _rx) = test_app();
    app.handle_api_response(ApiResponse::Upload {
        result: Ok(UploadResponse {
            results: vec![
                UploadFileResult::Added {
                    file: "good.txt".to_string(),
                    chunks_added: 2,
                },
                UploadFileResult::Failed {
                    file: "bad.bin".to_string(),
                    error: json!("Unsupported file type"),
                },
            ],
            chunks: Some(2),
        }),
    });

    let lines = texts(&app.model.session.upload_status);
    assert!(lines.contains(&"• bad.bin — ERROR: Unsupported file type".to_string()));
}

#[test]
fn test_upload_failure_shows_details() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "alpha").unwrap();

    let (mut app, _rx) = test_app();
    app.dispatch(Command::AddFiles(vec![path]));
    app.dispatch(Command::Upload);

    app.handle_api_response(ApiResponse::Upload {
        result: Err(ApiError::Detailed {
            message: "Embedding failed".to_string(),
            details: Some(json!({"status": 429})),
        }),
    });

    let lines = texts(&app.model.session.upload_status);
    assert_eq!(lines, vec!["Error: Embedding failed", "{\"status\":429}"]);
    assert_eq!(app.model.session.progress, ProgressState::Hidden);
    // failed uploads keep the selection for a retry
    assert_eq!(app.model.selection.pending.len(), 1);
}

#[test]
fn test_reset_without_confirmation_does_nothing() {
    let (mut app, mut rx) = test_app();
    app.model.session.answer = "kept".to_string();

    app.dispatch(Command::RequestReset);
    assert!(app.model.ui.confirm_reset);
    app.dispatch(Command::CancelReset);

    assert!(!app.model.ui.confirm_reset);
    assert!(drain(&mut rx).is_empty());
    assert_eq!(app.model.session.answer, "kept");
    assert_eq!(app.model.session.upload_status, UploadStatus::Empty);

    // a stray confirm without an open dialog is ignored
    app.dispatch(Command::ConfirmReset);
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn test_confirmed_reset_clears_everything() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "alpha").unwrap();

    let (mut app, mut rx) = test_app();
    app.dispatch(Command::AddFiles(vec![path]));
    app.model.session.answer = "old".to_string();
    app.model.session.citations_open = true;

    app.dispatch(Command::RequestReset);
    app.dispatch(Command::ConfirmReset);
    assert_eq!(drain(&mut rx), vec![ApiRequest::Reset]);

    app.handle_api_response(ApiResponse::Reset {
        result: Ok(ResetResponse {
            message: None,
            files_removed: Some(4),
        }),
    });

    let lines = texts(&app.model.session.upload_status);
    assert_eq!(lines, vec!["✅ Knowledge base cleared.", "Files removed: 4"]);
    assert_eq!(app.model.session.answer, "—");
    assert!(!app.model.session.citations_open);
    assert!(app.model.selection.pending.is_empty());
    assert_eq!(app.model.ui.toast_text(), Some("All documents and chunks removed"));
    assert_eq!(drain(&mut rx).len(), 1);
}

#[test]
fn test_reset_failure_only_toasts() {
    let (mut app, mut rx) = test_app();
    app.model.session.answer = "kept".to_string();

    app.handle_api_response(ApiResponse::Reset {
        result: Err(ApiError::Message("nope".to_string())),
    });

    assert_eq!(app.model.ui.toast_text(), Some("Reset failed"));
    assert_eq!(app.model.session.answer, "kept");
    assert!(drain(&mut rx).is_empty());
}
