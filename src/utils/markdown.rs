//! Markdown helpers for table output.

/// Escape characters that would break a markdown table cell or inline markup.
/// Newlines are flattened to spaces so a cell stays on one row.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '|' | '*' | '_' | '`' | '[' | ']' => {
                out.push('\\');
                out.push(c);
            }
            '\r' => {}
            '\n' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Text for an inline code span inside a table cell. Markup is literal there,
/// so only the pipe and backtick are neutralized.
pub fn code_span(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| *c != '\r')
        .map(|c| match c {
            '`' => '\'',
            '\n' => ' ',
            other => other,
        })
        .collect();
    format!("`{}`", cleaned.replace('|', "\\|"))
}

/// Truncate to at most `max_chars` characters, appending an ellipsis when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
