use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Palette;
use crate::logic::formatting::{pending_file_columns, upload_status_lines, LineKind};
use crate::logic::markup::sanitize_terminal;
use crate::model::{Focus, Model, SelectionModel, SessionModel};

/// Cut a string to a display width, marking the cut with an ellipsis
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

pub fn render_drop_zone(f: &mut Frame, area: Rect, model: &Model, palette: &Palette) {
    let selection = &model.selection;
    let focused = model.ui.focus == Focus::DropZone;

    let border_color = if selection.drop_active || focused {
        palette.accent
    } else {
        palette.border
    };
    let mut style = Style::default().fg(palette.fg);
    if selection.drop_active {
        style = style.bg(palette.drop_active);
    }

    let text = vec![
        Line::from(Span::styled(
            if selection.drop_active {
                "Release to add files"
            } else {
                "Drop files here"
            },
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "paste paths, click, or press Enter to browse",
            Style::default().fg(palette.muted),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selection.drop_active {
            BorderType::Thick
        } else {
            BorderType::Plain
        })
        .border_style(Style::default().fg(border_color))
        .title(" Documents ");

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

pub fn render_file_list(f: &mut Frame, area: Rect, selection: &SelectionModel, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(format!(" Selected ({}) ", selection.pending.len()));

    if selection.pending.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No files selected yet.",
            Style::default().fg(palette.muted),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = selection
        .pending
        .iter()
        .map(|file| {
            let (badge, name, size) = pending_file_columns(file);
            let badge = format!("{:<5}", badge);
            let fixed = badge.width() + 1 + size.width() + 1;
            let name = truncate_to_width(
                &sanitize_terminal(&name),
                inner_width.saturating_sub(fixed),
            );
            ListItem::new(Line::from(vec![
                Span::styled(badge, Style::default().fg(palette.accent)),
                Span::raw(" "),
                Span::raw(name),
                Span::raw(" "),
                Span::styled(size, Style::default().fg(palette.muted)),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Upload outcome lines plus the progress gauge on the last row
pub fn render_upload_status(f: &mut Frame, area: Rect, session: &SessionModel, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(" Index ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let lines: Vec<Line> = upload_status_lines(&session.upload_status)
        .into_iter()
        .map(|line| {
            let color = match line.kind {
                LineKind::Plain => palette.fg,
                LineKind::Ok => palette.ok,
                LineKind::Err => palette.err,
                LineKind::Muted => palette.muted,
            };
            Line::from(Span::styled(
                sanitize_terminal(&line.text),
                Style::default().fg(color),
            ))
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        rows[0],
    );

    if let Some(percent) = session.progress.percent() {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(palette.accent))
            .percent(percent as u16)
            .label(format!("{}%", percent));
        f.render_widget(gauge, rows[1]);
    }
}
