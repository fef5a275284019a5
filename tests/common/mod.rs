#![allow(dead_code)]

use docqa::api::HealthStatus;
use docqa::config::Config;
use docqa::services::ApiRequest;
use docqa::storage::Preferences;
use docqa::App;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// App wired to an in-memory store and a request channel the test can read
pub fn test_app() -> (App, UnboundedReceiver<ApiRequest>) {
    test_app_with(Config::default(), Preferences::in_memory().unwrap())
}

pub fn test_app_with(config: Config, prefs: Preferences) -> (App, UnboundedReceiver<ApiRequest>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (App::new(&config, prefs, tx), rx)
}

/// Everything sent so far
pub fn drain(rx: &mut UnboundedReceiver<ApiRequest>) -> Vec<ApiRequest> {
    let mut sent = Vec::new();
    while let Ok(request) = rx.try_recv() {
        sent.push(request);
    }
    sent
}

pub fn healthy(chunks: u64) -> HealthStatus {
    HealthStatus {
        ok: true,
        chunks,
        model: Some("m1".to_string()),
        error: None,
    }
}
