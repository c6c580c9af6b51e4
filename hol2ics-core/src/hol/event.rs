//! Holiday entries.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{ConvertError, ConvertResult};

/// Date format of .hol entries, e.g. `2024/12/25`.
pub const HOL_DATE_FORMAT: &str = "%Y/%m/%d";

/// Exact field widths; `%Y/%m/%d` alone also accepts short, signed or padded fields.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}/\d{2}/\d{2}$").expect("date pattern is valid"));

/// One holiday from a .hol file: a display name on a whole day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEvent {
    pub name: String,
    pub date: NaiveDate,
}

/// Parse a `name,YYYY/MM/DD` body line.
///
/// The name is kept verbatim; only the date is trimmed. `line_number` is
/// 1-based and only used for error reporting.
pub fn parse_event_line(line: &str, line_number: usize) -> ConvertResult<SourceEvent> {
    let commas = line.matches(',').count();
    let Some((name, date_str)) = line.split_once(',').filter(|_| commas == 1) else {
        return Err(ConvertError::LineStructure {
            line_number,
            line: line.to_string(),
            commas,
        });
    };

    let value = date_str.trim();
    let date_error = |source: Option<chrono::ParseError>| ConvertError::Date {
        line_number,
        value: value.to_string(),
        source,
    };

    if !DATE_SHAPE.is_match(value) {
        return Err(date_error(None));
    }
    let date = NaiveDate::parse_from_str(value, HOL_DATE_FORMAT)
        .map_err(|source| date_error(Some(source)))?;

    Ok(SourceEvent {
        name: name.to_string(),
        date,
    })
}
