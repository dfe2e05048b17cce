//! Formatting helpers shared across UIs.

use chrono::{DateTime, Utc};

use crate::types::Thought;

/// Format a saved-at timestamp relative to `now` (e.g., "2m ago").
pub fn format_saved_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(ts);

    if duration.num_seconds() < 5 {
        "just now".to_string()
    } else if duration.num_seconds() < 60 {
        format!("{}s ago", duration.num_seconds())
    } else if duration.num_minutes() < 60 {
        format!("{}m ago", duration.num_minutes())
    } else if duration.num_hours() < 24 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_days() < 7 {
        format!("{}d ago", duration.num_days())
    } else {
        ts.format("%b %d, %Y").to_string()
    }
}

/// Escape text for insertion into HTML.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Strip terminal control sequences and control characters.
///
/// ANSI escape sequences (CSI, OSC, ...) are dropped whole. Newlines and tabs
/// become spaces so a thought always renders as flowing text.
pub fn sanitize_for_terminal(s: &str) -> String {
    strip_ansi_escapes::strip_str(s)
        .chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Sanitize `s` and backslash-escape Markdown punctuation so stored text
/// renders literally in an exported list.
pub fn escape_markdown(s: &str) -> String {
    let clean = sanitize_for_terminal(s);
    let mut out = String::with_capacity(clean.len());
    for c in clean.chars() {
        if matches!(
            c,
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '|' | '~' | '!'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Comma-joined tags, or an em dash when there are none.
pub fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        "—".to_string()
    } else {
        tags.join(", ")
    }
}

/// `categories • vibes` line for a thought.
pub fn tag_line(thought: &Thought) -> String {
    format!(
        "{} • {}",
        format_tags(&thought.category),
        format_tags(&thought.vibe)
    )
}

/// Text placed on the clipboard when copying a thought.
pub fn share_line(thought: &Thought) -> String {
    format!("🚿 Shower Thought: \"{}\"\n— sudsy", thought.text)
}
