use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Palette;

const HOTKEYS: &[(&str, &str)] = &[
    ("Tab", "Focus"),
    ("^O", "Browse"),
    ("^U", "Upload"),
    ("^L", "Clear files"),
    ("^G", "Suggest"),
    ("Enter", "Ask"),
    ("^Y", "Copy"),
    ("^K", "Clear answer"),
    ("^E", "Export"),
    ("^R", "Reset"),
    ("^T", "Theme"),
    ("^P", "Ping"),
    ("^Q", "Quit"),
];

/// Render the one-line hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, palette: &Palette) {
    let mut spans = Vec::with_capacity(HOTKEYS.len() * 3);
    for (key, label) in HOTKEYS {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(palette.muted),
        ));
        spans.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
