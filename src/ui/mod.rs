// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - theme: Dark and light palettes
// - layout: Calculates screen layout (header, two columns, legend)
// - render: Main orchestration function that coordinates all rendering
// - header: Server state, chunk count and model tag
// - knowledge: Drop zone, pending file list, upload status and progress
// - qa: Question and topK inputs, suggestion chips, answer, citations
// - legend: Renders hotkey legend
// - dialogs: File picker prompt and reset confirmation
// - toast: Renders toast notifications (brief pop-up messages)
//
// Every backend-provided string passes through logic::markup::sanitize_terminal
// before it reaches a widget.

pub mod dialogs;
pub mod header;
pub mod knowledge;
pub mod layout;
pub mod legend;
pub mod qa;
pub mod render;
pub mod theme;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
