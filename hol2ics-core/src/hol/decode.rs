//! UTF-16 decoding for .hol files.

use crate::error::{ConvertError, ConvertResult};

/// Decode raw .hol bytes into a string.
///
/// A byte-order mark picks the endianness and is dropped. Without one the
/// bytes are read as little-endian, which is what Outlook writes.
pub fn decode_utf16(bytes: &[u8]) -> ConvertResult<String> {
    let (body, big_endian) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (rest, false),
        [0xFE, 0xFF, rest @ ..] => (rest, true),
        _ => (bytes, false),
    };

    if body.len() % 2 != 0 {
        return Err(ConvertError::Decode(format!(
            "odd byte count ({}) is not valid UTF-16",
            body.len()
        )));
    }

    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            if big_endian {
                u16::from_be_bytes(pair)
            } else {
                u16::from_le_bytes(pair)
            }
        })
        .collect();

    String::from_utf16(&units).map_err(|e| ConvertError::Decode(e.to_string()))
}
