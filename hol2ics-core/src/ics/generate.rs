//! ICS document generation.

use std::path::Path;

use chrono::Utc;
use tracing::{debug, info};

use super::capability::{Clock, RandomUids, SystemClock, UidGenerator};
use super::text::escape_text;
use super::CRLF;
use crate::config::{ConvertOptions, StampStyle};
use crate::error::{ConvertError, ConvertResult};
use crate::hol::SourceEvent;

/// A fully assembled .ics document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsDocument {
    pub content: String,
    pub event_count: usize,
}

impl IcsDocument {
    /// Write the document to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> ConvertResult<()> {
        std::fs::write(path, &self.content).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), events = self.event_count, "Wrote .ics file");
        Ok(())
    }
}

/// Serializes holidays into an .ics document.
///
/// UIDs and DTSTAMP values come from the injected `UidGenerator` and `Clock`.
pub struct IcsWriter<U = RandomUids, C = SystemClock> {
    uids: U,
    clock: C,
    escape_text: bool,
    stamp_style: StampStyle,
}

impl IcsWriter {
    /// Writer with random UUIDs and the system clock.
    pub fn new(options: &ConvertOptions) -> Self {
        Self::with_capabilities(RandomUids, SystemClock, options)
    }
}

impl<U: UidGenerator, C: Clock> IcsWriter<U, C> {
    pub fn with_capabilities(uids: U, clock: C, options: &ConvertOptions) -> Self {
        IcsWriter {
            uids,
            clock,
            escape_text: options.escape_text,
            stamp_style: options.dtstamp,
        }
    }

    /// Render `title` and `events` into a complete document.
    ///
    /// Nothing is written anywhere; the first failing event aborts the render
    /// and its error is returned.
    pub fn render<I>(&mut self, title: &str, events: I) -> ConvertResult<IcsDocument>
    where
        I: IntoIterator<Item = ConvertResult<SourceEvent>>,
    {
        let mut lines = vec![
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            format!("PRODID:-//{}//EN", self.text(title)),
        ];

        let mut event_count = 0;
        for event in events {
            let event = event?;
            self.push_event(&mut lines, &event);
            event_count += 1;
        }

        lines.push("END:VCALENDAR".to_string());
        debug!(events = event_count, lines = lines.len(), "Rendered .ics document");

        let mut content = String::with_capacity(lines.iter().map(|l| l.len() + CRLF.len()).sum());
        for line in &lines {
            content.push_str(line);
            content.push_str(CRLF);
        }

        Ok(IcsDocument {
            content,
            event_count,
        })
    }

    fn push_event(&mut self, lines: &mut Vec<String>, event: &SourceEvent) {
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}", self.uids.next_uid()));
        lines.push(format!("DTSTAMP:{}", self.dtstamp()));
        lines.push(format!("DTSTART;VALUE=DATE:{}", event.date.format("%Y%m%d")));
        lines.push(format!("SUMMARY:{}", self.text(&event.name)));
        lines.push("END:VEVENT".to_string());
    }

    fn dtstamp(&self) -> String {
        let now = self.clock.now();
        match self.stamp_style {
            StampStyle::Local => now.naive_local().format("%Y%m%dT%H%M%S").to_string(),
            StampStyle::Utc => now.with_timezone(&Utc).format("%Y%m%dT%H%M%SZ").to_string(),
        }
    }

    fn text(&self, value: &str) -> String {
        if self.escape_text {
            escape_text(value)
        } else {
            value.to_string()
        }
    }
}
