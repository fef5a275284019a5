//! HTML export of the current session
//!
//! Every interpolated value goes through `escape_html`; file names,
//! questions, and backend strings are all untrusted.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use super::formatting::{format_citation, upload_status_lines, LineKind};
use super::markup::escape_html;
use crate::model::Model;

fn line_class(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Plain => "",
        LineKind::Ok => "ok",
        LineKind::Err => "err",
        LineKind::Muted => "muted",
    }
}

pub fn render_session_html(model: &Model, generated_at: &str) -> String {
    let mut html = String::new();
    let e = escape_html;

    html.push_str("<!doctype html>\n<html><head><meta charset=\"utf-8\">");
    html.push_str("<title>docqa session</title></head><body>\n");
    let _ = writeln!(html, "<h1>Session {}</h1>", e(generated_at));

    let _ = writeln!(
        html,
        "<p class=\"status\">Server: {} · Chunks: {} · {}</p>",
        e(model.backend.server_label()),
        e(&model.backend.chunks_label()),
        e(&model.backend.model_tag()),
    );

    let upload_lines = upload_status_lines(&model.session.upload_status);
    if !upload_lines.is_empty() {
        html.push_str("<section id=\"upload\">\n");
        for line in &upload_lines {
            let _ = writeln!(
                html,
                "<div class=\"{}\">{}</div>",
                line_class(line.kind),
                e(&line.text)
            );
        }
        html.push_str("</section>\n");
    }

    if let Some(question) = &model.session.last_question {
        let _ = writeln!(html, "<h2>Question</h2>\n<p id=\"question\">{}</p>", e(question));
    }
    let _ = writeln!(
        html,
        "<h2>Answer</h2>\n<pre id=\"answer\">{}</pre>",
        e(&model.session.answer)
    );

    if !model.session.citations.is_empty() {
        html.push_str("<h2>Citations</h2>\n<p id=\"citations\">");
        let cites: Vec<String> = model
            .session
            .citations
            .iter()
            .map(|c| e(&format_citation(c)))
            .collect();
        html.push_str(&cites.join(" "));
        html.push_str("</p>\n");
    }

    html.push_str("</body></html>\n");
    html
}

/// Write the session to `dir`, returning the file path
pub fn export_session(dir: &Path, model: &Model) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let now = chrono::Local::now();
    let path = dir.join(format!("docqa-session-{}.html", now.format("%Y%m%d-%H%M%S")));
    let html = render_session_html(model, &now.format("%Y-%m-%d %H:%M:%S").to_string());

    std::fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
