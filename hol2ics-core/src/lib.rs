//! Core of hol2ics: reads Outlook holiday exports and writes .ics calendars.
//!
//! - `hol` decodes and parses the `[Title] count` + `name,YYYY/MM/DD` format
//! - `ics` renders RFC 5545 documents of all-day events
//! - `convert` ties both to the filesystem

pub mod config;
pub mod convert;
pub mod error;
pub mod hol;
pub mod ics;
pub mod paths;

pub use config::{ConvertOptions, HeaderMode, StampStyle};
pub use convert::{convert_file, convert_file_with, convert_text, ConversionReport};
pub use error::{ConvertError, ConvertResult};
