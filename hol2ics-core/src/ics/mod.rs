//! .ics document generation.
//!
//! Output follows RFC 5545: CRLF line endings, all-day events as
//! `DTSTART;VALUE=DATE`, one VEVENT per holiday.

mod capability;
mod generate;
mod text;

pub use capability::{Clock, FixedClock, RandomUids, SequentialUids, SystemClock, UidGenerator};
pub use generate::{IcsDocument, IcsWriter};
pub use text::escape_text;

/// Line terminator required by RFC 5545 §3.1.
pub const CRLF: &str = "\r\n";
