/// Utility functions used throughout the application

use std::path::PathBuf;

/// Platform data directory for this app, with a temp-dir fallback
pub fn data_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(dir) => dir.join("docqa"),
        None => std::env::temp_dir().join("docqa"),
    }
}

pub fn log_dir() -> PathBuf {
    data_dir().join("logs")
}

pub fn preferences_path() -> PathBuf {
    data_dir().join("prefs.db")
}

pub fn default_export_dir() -> PathBuf {
    data_dir().join("exports")
}
