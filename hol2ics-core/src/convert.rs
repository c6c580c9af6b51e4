//! End-to-end .hol → .ics conversion.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::ConvertOptions;
use crate::error::{ConvertError, ConvertResult};
use crate::hol::{decode_utf16, read_source, SectionHeader};
use crate::ics::{Clock, IcsDocument, IcsWriter, UidGenerator};

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub title: String,
    pub declared_count: Option<usize>,
    pub event_count: usize,
}

/// Convert `source` into `destination` with random UIDs and the system clock.
pub fn convert_file(
    source: &Path,
    destination: &Path,
    options: &ConvertOptions,
) -> ConvertResult<ConversionReport> {
    convert_file_with(source, destination, options, IcsWriter::new(options))
}

/// Convert `source` into `destination` using the given writer.
///
/// The destination is only written once the whole document rendered, so a
/// bad source line leaves no file behind (and an existing one untouched).
pub fn convert_file_with<U: UidGenerator, C: Clock>(
    source: &Path,
    destination: &Path,
    options: &ConvertOptions,
    mut writer: IcsWriter<U, C>,
) -> ConvertResult<ConversionReport> {
    let bytes = std::fs::read(source).map_err(|e| ConvertError::Io {
        path: source.to_path_buf(),
        source: e,
    })?;
    debug!(path = %source.display(), bytes = bytes.len(), "Read .hol file");

    let text = decode_utf16(&bytes)?;
    let (header, document) = convert_text(&text, options, &mut writer)?;
    document.write_to(destination)?;

    Ok(ConversionReport {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        title: header.title,
        declared_count: header.declared_count,
        event_count: document.event_count,
    })
}

/// Convert decoded .hol text into an .ics document in memory.
pub fn convert_text<U: UidGenerator, C: Clock>(
    text: &str,
    options: &ConvertOptions,
    writer: &mut IcsWriter<U, C>,
) -> ConvertResult<(SectionHeader, IcsDocument)> {
    let source = read_source(text, options)?;
    let document = writer.render(&source.header.title, source.events)?;

    if let Some(declared) = source.header.declared_count {
        if declared != document.event_count {
            warn!(
                declared,
                found = document.event_count,
                "Header count does not match the number of entries"
            );
        }
    }

    Ok((source.header, document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeaderMode;
    use crate::ics::{FixedClock, SequentialUids};
    use chrono::DateTime;

    fn test_writer(options: &ConvertOptions) -> IcsWriter<SequentialUids, FixedClock> {
        let instant = DateTime::parse_from_rfc3339("2024-12-01T08:00:00+00:00").unwrap();
        IcsWriter::with_capabilities(SequentialUids::default(), FixedClock(instant), options)
    }

    #[test]
    fn test_convert_text_holidays() {
        let options = ConvertOptions::default();
        let mut writer = test_writer(&options);
        let text = "[Holidays] 2\r\nNew Year,2024/01/01\r\nChristmas,2024/12/25\r\n";

        let (header, doc) = convert_text(text, &options, &mut writer).unwrap();

        assert_eq!(header.title, "Holidays");
        assert_eq!(doc.event_count, 2);
        assert!(doc.content.contains("PRODID:-//Holidays//EN\r\n"));
        assert!(doc
            .content
            .contains("DTSTART;VALUE=DATE:20240101\r\nSUMMARY:New Year\r\n"));
        assert!(doc
            .content
            .contains("DTSTART;VALUE=DATE:20241225\r\nSUMMARY:Christmas\r\n"));
    }

    #[test]
    fn test_convert_text_count_mismatch_still_converts() {
        let options = ConvertOptions::default();
        let mut writer = test_writer(&options);

        let (header, doc) =
            convert_text("[Holidays] 5\nNew Year,2024/01/01\n", &options, &mut writer).unwrap();

        assert_eq!(header.declared_count, Some(5));
        assert_eq!(doc.event_count, 1);
    }

    #[test]
    fn test_convert_text_lenient_header() {
        let options = ConvertOptions {
            header_mode: HeaderMode::Lenient,
            ..ConvertOptions::default()
        };
        let mut writer = test_writer(&options);

        let (_, doc) =
            convert_text("Holidays\nNew Year,2024/01/01\n", &options, &mut writer).unwrap();

        assert!(doc.content.contains("PRODID:-//hol2ics//EN\r\n"));
    }

    #[test]
    fn test_convert_text_strict_header() {
        let options = ConvertOptions::default();
        let mut writer = test_writer(&options);

        assert!(matches!(
            convert_text("Holidays\nNew Year,2024/01/01\n", &options, &mut writer),
            Err(ConvertError::Header { .. })
        ));
    }
}
