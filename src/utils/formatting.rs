//! Formatting utilities used for CLI and export outputs.

/// First eight characters of an id, enough to type it back.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Wrap long free text (descriptions, topics) with a leading indent.
pub fn wrap_indented(text: &str, width: usize, indent: &str) -> String {
    let options = textwrap::Options::new(width)
        .initial_indent(indent)
        .subsequent_indent(indent);
    textwrap::fill(text.trim(), options)
}

/// "in 3 days", "tomorrow", "today", "2 days ago".
pub fn describe_days_left(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d > 1 => format!("in {d} days"),
        d => format!("{} days ago", -d),
    }
}

/// "1 day left" / "5 days left" / "Done" for past exams.
pub fn days_left_label(days: i64) -> String {
    match days {
        d if d < 0 => "Done".to_string(),
        1 => "1 day left".to_string(),
        d => format!("{d} days left"),
    }
}
