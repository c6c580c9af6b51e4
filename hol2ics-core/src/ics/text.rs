//! TEXT value escaping (RFC 5545 §3.3.11).

/// Escape backslashes, semicolons, commas and line breaks.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }

    escaped
}
