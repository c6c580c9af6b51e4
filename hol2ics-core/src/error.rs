//! Error types for hol2ics conversions.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a .hol file.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("{} must end with the .{expected} extension", path.display())]
    InvalidExtension { path: PathBuf, expected: &'static str },

    #[error("Source file is empty, expected a `[Title] count` header")]
    EmptySource,

    #[error("Header line {line:?} does not match `[Title] count`")]
    Header { line: String },

    #[error("Line {line_number}: expected `name,YYYY/MM/DD` with exactly one comma, found {commas} in {line:?}")]
    LineStructure {
        line_number: usize,
        line: String,
        commas: usize,
    },

    #[error("Line {line_number}: invalid date {value:?}, expected YYYY/MM/DD")]
    Date {
        line_number: usize,
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("Could not decode UTF-16 source: {0}")]
    Decode(String),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for hol2ics operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
