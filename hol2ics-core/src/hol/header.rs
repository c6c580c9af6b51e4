//! `[Title] count` section headers.

use std::sync::LazyLock;

use regex::Regex;

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(?P<title>.+)\]\s*(?P<count>[0-9]+)").expect("header pattern is valid")
});

/// A parsed section header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub title: String,
    /// Number of entries the export claims the section holds.
    /// `None` when the header was replaced by a fallback title.
    pub declared_count: Option<usize>,
}

/// Match a line against the `[Title] count` pattern.
///
/// Returns `None` when the line is not a header, including when the count
/// does not fit in a `usize`.
pub fn parse_header(line: &str) -> Option<SectionHeader> {
    let captures = HEADER_PATTERN.captures(line)?;
    let declared_count = captures["count"].parse().ok()?;

    Some(SectionHeader {
        title: captures["title"].to_string(),
        declared_count: Some(declared_count),
    })
}
