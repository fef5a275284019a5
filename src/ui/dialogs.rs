use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::Palette;
use crate::logic::markup::sanitize_terminal;

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Render the reset confirmation dialog
pub fn render_reset_confirmation(f: &mut Frame, palette: &Palette) {
    let prompt_text = "This will remove all indexed chunks and delete uploaded files. Continue?\n\n\
        (y/n)";

    let prompt_area = centered(f.area(), 50, 7);
    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Reset")
                .border_style(Style::default().fg(palette.warn)),
        )
        .style(Style::default().fg(palette.fg).bg(palette.bg))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render the file picker prompt (a path or glob pattern)
pub fn render_file_picker(f: &mut Frame, value: &str, palette: &Palette) {
    let prompt_area = centered(f.area(), 70, 6);
    let max = prompt_area.width.saturating_sub(4) as usize;

    let mut input = sanitize_terminal(value);
    input.push('▏');
    let len = input.chars().count();
    if len > max {
        input = input.chars().skip(len - max).collect();
    }

    let text = vec![
        Line::from(Span::styled(
            input,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Path or pattern (e.g. ~/docs/*.pdf) · Enter add · Esc cancel",
            Style::default().fg(palette.muted),
        )),
    ];

    let prompt = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Add Files")
                .border_style(Style::default().fg(palette.accent)),
        )
        .style(Style::default().fg(palette.fg).bg(palette.bg));

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}
