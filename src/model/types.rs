//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! the client's own view of files, progress, and display state.

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, UNIX_EPOCH};

use crate::api::{ApiError, UploadFileResult};

/// How long the progress bar lingers at 100% before hiding
pub const PROGRESS_LINGER: Duration = Duration::from_millis(600);

/// A local file waiting to be uploaded
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    /// Last-modified time in milliseconds since the Unix epoch
    pub modified_ms: i64,
}

/// Identity used for deduplication: two selections of the same file
/// collapse even if they came from different paths.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileKey {
    pub name: String,
    pub size: u64,
    pub modified_ms: i64,
}

impl PendingFile {
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        if !metadata.is_file() {
            bail!("{} is not a file", path.display());
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let modified_ms = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
            modified_ms,
        })
    }

    pub fn key(&self) -> FileKey {
        FileKey {
            name: self.name.clone(),
            size: self.size,
            modified_ms: self.modified_ms,
        }
    }
}

/// Ordered, deduplicated set of files awaiting upload
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendingFileSet {
    files: Vec<PendingFile>,
}

impl PendingFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append files not already present; returns how many were added
    pub fn add<I: IntoIterator<Item = PendingFile>>(&mut self, files: I) -> usize {
        let mut seen: HashSet<FileKey> = self.files.iter().map(PendingFile::key).collect();
        let before = self.files.len();
        for file in files {
            if seen.insert(file.key()) {
                self.files.push(file);
            }
        }
        self.files.len() - before
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingFile> {
        self.files.iter()
    }

    pub fn to_vec(&self) -> Vec<PendingFile> {
        self.files.clone()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Only an explicit "light" selects the light theme
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Which pane receives typed input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    DropZone,
    Question,
    TopK,
    Answer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServerState {
    Unknown,
    Online,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressState {
    Hidden,
    Visible {
        percent: u8,
        hide_at: Option<Instant>,
    },
}

impl ProgressState {
    pub fn set(percent: i64) -> Self {
        ProgressState::Visible {
            percent: percent.clamp(0, 100) as u8,
            hide_at: None,
        }
    }

    /// Full bar that hides itself after [`PROGRESS_LINGER`]
    pub fn complete(now: Instant) -> Self {
        ProgressState::Visible {
            percent: 100,
            hide_at: Some(now + PROGRESS_LINGER),
        }
    }

    pub fn percent(&self) -> Option<u8> {
        match self {
            ProgressState::Hidden => None,
            ProgressState::Visible { percent, .. } => Some(*percent),
        }
    }

    /// Advance time; returns the state after any pending hide
    pub fn tick(self, now: Instant) -> Self {
        match self {
            ProgressState::Visible {
                hide_at: Some(at), ..
            } if now >= at => ProgressState::Hidden,
            other => other,
        }
    }
}

/// What the upload status area currently shows
#[derive(Clone, Debug, PartialEq)]
pub enum UploadStatus {
    Empty,
    Indexed {
        results: Vec<UploadFileResult>,
        total_chunks: Option<u64>,
    },
    Failed(ApiError),
    Cleared {
        message: Option<String>,
        files_removed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64, modified_ms: i64) -> PendingFile {
        PendingFile {
            path: PathBuf::from(format!("/tmp/{}", name)),
            name: name.to_string(),
            size,
            modified_ms,
        }
    }

    #[test]
    fn test_add_deduplicates_by_name_size_mtime() {
        let mut set = PendingFileSet::new();
        assert_eq!(set.add(vec![file("a.txt", 10, 1)]), 1);
        assert_eq!(set.add(vec![file("a.txt", 10, 1)]), 0);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_add_keeps_same_name_with_different_size() {
        let mut set = PendingFileSet::new();
        set.add(vec![file("a.txt", 10, 1), file("a.txt", 11, 1), file("a.txt", 10, 2)]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_add_deduplicates_within_one_batch() {
        let mut set = PendingFileSet::new();
        assert_eq!(set.add(vec![file("a.txt", 10, 1), file("a.txt", 10, 1)]), 1);
    }

    #[test]
    fn test_same_file_from_different_paths_collapses() {
        let mut set = PendingFileSet::new();
        let mut other = file("a.txt", 10, 1);
        other.path = PathBuf::from("/elsewhere/a.txt");
        set.add(vec![file("a.txt", 10, 1), other]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_order_is_preserved() {
        let mut set = PendingFileSet::new();
        set.add(vec![file("b.txt", 1, 1), file("a.txt", 1, 1)]);
        let names: Vec<_> = set.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b.txt", "a.txt"]);
    }

    #[test]
    fn test_from_path_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PendingFile::from_path(dir.path()).is_err());
    }

    #[test]
    fn test_from_path_reads_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();

        let f = PendingFile::from_path(&path).unwrap();
        assert_eq!(f.name, "notes.txt");
        assert_eq!(f.size, 5);
        assert!(f.modified_ms > 0);
    }

    #[test]
    fn test_theme_from_stored() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Dark);
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(ProgressState::set(150).percent(), Some(100));
        assert_eq!(ProgressState::set(-5).percent(), Some(0));
    }

    #[test]
    fn test_progress_hides_after_linger() {
        let now = Instant::now();
        let p = ProgressState::complete(now);
        assert_eq!(p.tick(now).percent(), Some(100));
        assert_eq!(p.tick(now + PROGRESS_LINGER), ProgressState::Hidden);
    }

    #[test]
    fn test_progress_without_deadline_stays() {
        let p = ProgressState::set(10);
        assert_eq!(p.tick(Instant::now() + Duration::from_secs(60)), p);
    }
}
