//! Escaping at the rendering boundaries
//!
//! File names, questions, and backend strings are untrusted. Anything that
//! goes into HTML passes through [`escape_html`]; anything drawn on the
//! terminal passes through [`sanitize_terminal`].

/// Escape the five HTML-special characters
///
/// # Examples
/// ```
/// use docqa::logic::markup::escape_html;
///
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_html(r#"a & "b" 'c'"#), "a &amp; &quot;b&quot; &#39;c&#39;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Drop control characters so backend text cannot emit terminal escapes.
/// Newlines and tabs survive; tabs become a single space.
pub fn sanitize_terminal(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '\n' => Some('\n'),
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}
