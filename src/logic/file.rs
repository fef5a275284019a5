//! File selection helpers
//!
//! Badges and sizes for the pending list, and turning picker input or
//! dropped text into paths.

use std::path::PathBuf;

/// Type badge for a file name: the extension, uppercased.
///
/// # Examples
/// ```
/// use docqa::logic::file::file_badge;
///
/// assert_eq!(file_badge("report.pdf"), "PDF");
/// assert_eq!(file_badge("Notes.Docx"), "DOCX");
/// assert_eq!(file_badge("data.csv"), "CSV");
/// ```
pub fn file_badge(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_uppercase(),
        None => String::new(),
    }
}

/// Size in kilobytes, rounded up
pub fn size_kb(bytes: u64) -> u64 {
    bytes.div_ceil(1024)
}

/// Expand a home-relative path
fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

fn is_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// Resolve the picker's value into candidate paths.
///
/// A glob pattern expands to the files it matches; anything else is taken
/// as a single path. Existence is checked later, when files are added.
pub fn expand_selection(input: &str) -> Vec<PathBuf> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }

    if !is_pattern(input) {
        return vec![expand_home(input)];
    }

    let pattern = expand_home(input);
    match glob::glob(&pattern.to_string_lossy()) {
        Ok(paths) => paths.filter_map(Result::ok).filter(|p| p.is_file()).collect(),
        Err(e) => {
            tracing::debug!("Invalid pattern {}: {}", input, e);
            Vec::new()
        }
    }
}

/// Split dropped text into paths.
///
/// Terminals paste dropped files as shell-quoted paths separated by spaces
/// or newlines, or as `file://` URIs. Handles single and double quotes and
/// backslash-escaped characters.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_token = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                        in_token = true;
                    }
                }
                c if c.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                c => {
                    current.push(c);
                    in_token = true;
                }
            },
        }
    }
    if in_token {
        tokens.push(current);
    }

    tokens
        .into_iter()
        .filter(|t| !t.is_empty())
        .map(|t| match t.strip_prefix("file://") {
            Some(uri_path) => PathBuf::from(
                urlencoding::decode(uri_path)
                    .map(|p| p.into_owned())
                    .unwrap_or_else(|_| uri_path.to_string()),
            ),
            None => expand_home(&t),
        })
        .collect()
}
