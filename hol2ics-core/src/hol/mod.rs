//! Reader for Outlook holiday exports (.hol).
//!
//! A .hol file is UTF-16 text with a `[Title] count` header followed by one
//! `name,YYYY/MM/DD` line per holiday.

mod decode;
mod event;
mod header;
mod reader;

pub use decode::decode_utf16;
pub use event::{parse_event_line, SourceEvent};
pub use header::{parse_header, SectionHeader};
pub use reader::{read_source, Events, HolSource};
