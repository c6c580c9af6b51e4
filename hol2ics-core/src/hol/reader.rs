//! Streaming reader over a decoded .hol document.

use std::iter::Enumerate;
use std::str::Lines;

use tracing::{debug, warn};

use super::event::{parse_event_line, SourceEvent};
use super::header::{parse_header, SectionHeader};
use crate::config::{ConvertOptions, HeaderMode};
use crate::error::{ConvertError, ConvertResult};

/// A .hol document split into its header and a lazy event stream.
#[derive(Debug)]
pub struct HolSource<'a> {
    pub header: SectionHeader,
    pub events: Events<'a>,
}

/// Forward-only stream of events from the first section.
///
/// Not `Clone`: the lines it walks are consumed exactly once.
/// Stops at the first error, or at the header of a following section.
#[derive(Debug)]
pub struct Events<'a> {
    lines: Enumerate<Lines<'a>>,
    finished: bool,
}

/// Read the header of `text` and return it together with the event stream.
pub fn read_source<'a>(text: &'a str, options: &ConvertOptions) -> ConvertResult<HolSource<'a>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines().enumerate();

    let (_, first) = lines.next().ok_or(ConvertError::EmptySource)?;

    let header = match (parse_header(first), options.header_mode) {
        (Some(header), _) => header,
        (None, HeaderMode::Strict) => {
            return Err(ConvertError::Header {
                line: first.to_string(),
            })
        }
        (None, HeaderMode::Lenient) => {
            warn!(
                line = first,
                fallback = %options.fallback_title,
                "Header does not match `[Title] count`, using fallback title"
            );
            SectionHeader {
                title: options.fallback_title.clone(),
                declared_count: None,
            }
        }
    };

    debug!(title = %header.title, declared = ?header.declared_count, "Read .hol header");

    Ok(HolSource {
        header,
        events: Events {
            lines,
            finished: false,
        },
    })
}

impl Iterator for Events<'_> {
    type Item = ConvertResult<SourceEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some((index, line)) = self.lines.next() else {
            self.finished = true;
            return None;
        };

        // Only the first section is converted
        if let Some(next_section) = parse_header(line) {
            warn!(
                section = %next_section.title,
                line_number = index + 1,
                "Ignoring additional section, only the first one is converted"
            );
            self.finished = true;
            return None;
        }

        let result = parse_event_line(line, index + 1);
        if result.is_err() {
            self.finished = true;
        }
        Some(result)
    }
}
