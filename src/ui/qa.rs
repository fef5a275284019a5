use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::Palette;
use crate::logic::formatting::format_citations;
use crate::logic::markup::sanitize_terminal;
use crate::model::session::THINKING;
use crate::model::{Focus, Model, SessionModel};

fn input_block<'a>(title: &'a str, focused: bool, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            palette.accent
        } else {
            palette.border
        }))
        .title(title)
}

/// Single-line input; the visible tail follows the cursor
fn input_line(value: &str, focused: bool, width: u16) -> String {
    let mut text = value.to_string();
    if focused {
        text.push('▏');
    }
    let max = width.saturating_sub(2) as usize;
    let len = text.chars().count();
    if len > max {
        text = text.chars().skip(len - max).collect();
    }
    text
}

pub fn render_question(f: &mut Frame, area: Rect, model: &Model, palette: &Palette) {
    let focused = model.ui.focus == Focus::Question;
    let session = &model.session;

    let paragraph = if session.question.is_empty() && !focused {
        Paragraph::new(Span::styled(
            "Ask something about your documents…",
            Style::default().fg(palette.muted),
        ))
    } else {
        Paragraph::new(input_line(
            &sanitize_terminal(&session.question),
            focused,
            area.width,
        ))
    };

    f.render_widget(
        paragraph.block(input_block(" Question ", focused, palette)),
        area,
    );
}

pub fn render_top_k(f: &mut Frame, area: Rect, model: &Model, palette: &Palette) {
    let focused = model.ui.focus == Focus::TopK;
    let text = input_line(&model.session.top_k_input, focused, area.width);
    f.render_widget(
        Paragraph::new(text).block(input_block(" topK ", focused, palette)),
        area,
    );
}

pub fn render_suggestions(f: &mut Frame, area: Rect, session: &SessionModel, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(" Suggestions (Ctrl+N) ");

    if session.suggestions.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                "No suggestions",
                Style::default().fg(palette.muted),
            ))
            .block(block),
            area,
        );
        return;
    }

    let mut spans = Vec::new();
    for (i, suggestion) in session.suggestions.iter().enumerate() {
        let style = if session.selected_suggestion == Some(i) {
            Style::default()
                .fg(palette.bg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.accent)
        };
        spans.push(Span::styled(format!(" {} ", sanitize_terminal(suggestion)), style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

pub fn render_answer(f: &mut Frame, area: Rect, model: &Model, palette: &Palette) {
    let session = &model.session;
    let focused = model.ui.focus == Focus::Answer;

    let style = if session.answer == THINKING {
        Style::default()
            .fg(palette.muted)
            .add_modifier(Modifier::ITALIC)
    } else if session.answer.starts_with("Error:") {
        Style::default().fg(palette.err)
    } else {
        Style::default().fg(palette.fg)
    };

    let mut block = input_block(" Answer ", focused, palette);
    if let Some(question) = &session.last_question {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", sanitize_terminal(question)),
            Style::default().fg(palette.muted),
        )));
    }

    let paragraph = Paragraph::new(sanitize_terminal(&session.answer))
        .style(style)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

pub fn render_citations(f: &mut Frame, area: Rect, session: &SessionModel, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(format!(" Citations ({}) ", session.citations.len()));

    let paragraph = Paragraph::new(sanitize_terminal(&format_citations(&session.citations)))
        .style(Style::default().fg(palette.muted))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
