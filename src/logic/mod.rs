//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or a backend:
//! - errors: Transport error classification and display
//! - file: File badges, sizes, and dropped-path parsing
//! - formatting: Status lines, citations, and upload results as text
//! - markup: HTML escaping and terminal sanitizing
//! - report: HTML export of the current session
//! - ui: Toast timing, focus cycling, topK parsing

pub mod errors;
pub mod file;
pub mod formatting;
pub mod markup;
pub mod report;
pub mod ui;
