use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top bar: title, server state, chunks, model
    pub header_area: Rect,
    pub drop_zone_area: Rect,
    pub files_area: Rect,
    /// Upload outcome and progress gauge
    pub upload_area: Rect,
    pub question_area: Rect,
    pub top_k_area: Rect,
    /// Suggestion chips (if visible)
    pub suggestions_area: Option<Rect>,
    pub answer_area: Rect,
    /// Citations panel (if open)
    pub citations_area: Option<Rect>,
    /// Hotkey legend (full width)
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(
    terminal_size: Rect,
    upload_lines: usize,
    suggestions_visible: bool,
    citations_open: bool,
) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (top border, text, bottom border)
            Constraint::Min(8),    // Content area
            Constraint::Length(1), // Legend
        ])
        .split(terminal_size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);

    // Upload status grows with its content (+2 borders, +1 gauge row), capped
    let upload_height = (upload_lines as u16 + 3).clamp(3, 12);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(upload_height),
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(if suggestions_visible { 5 } else { 0 }),
            Constraint::Min(3),
            Constraint::Length(if citations_open { 5 } else { 0 }),
        ])
        .split(columns[1]);

    // Question and topK share the first row of the right column
    let input_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(10)])
        .split(right[0]);

    LayoutInfo {
        header_area: main_chunks[0],
        drop_zone_area: left[0],
        files_area: left[1],
        upload_area: left[2],
        question_area: input_split[0],
        top_k_area: input_split[1],
        suggestions_area: suggestions_visible.then_some(right[1]),
        answer_area: right[2],
        citations_area: citations_open.then_some(right[3]),
        legend_area: main_chunks[2],
    }
}
