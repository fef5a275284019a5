use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::logic::markup::sanitize_terminal;
use crate::model::{BackendModel, ServerState};

/// Render the top bar: title, server state, chunk count and model tag
pub fn render_header(f: &mut Frame, area: Rect, backend: &BackendModel, palette: &Palette) {
    let server_color = match backend.server {
        ServerState::Online => palette.ok,
        ServerState::Error => palette.err,
        ServerState::Unknown => palette.muted,
    };

    let line = Line::from(vec![
        Span::styled(
            "Doc Q&A",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ Server: ", Style::default().fg(palette.muted)),
        Span::styled(backend.server_label(), Style::default().fg(server_color)),
        Span::styled(" │ Chunks: ", Style::default().fg(palette.muted)),
        Span::raw(backend.chunks_label()),
        Span::styled(" │ ", Style::default().fg(palette.muted)),
        Span::raw(sanitize_terminal(&backend.model_tag())),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title_bottom(Line::from(Span::styled(
            format!(" {} ", sanitize_terminal(&backend.base_url)),
            Style::default().fg(palette.muted),
        )));

    f.render_widget(Paragraph::new(line).block(block), area);
}
