//! Text encoding resolution and decoding.

use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::error::{IngestError, Result};

/// Resolve a WHATWG encoding label such as `ISO-8859-1`, `latin1` or `utf-8`.
///
/// Latin-1 labels resolve to windows-1252, which is a superset for every
/// printable byte.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| IngestError::UnknownEncoding {
        label: label.to_string(),
    })
}

/// Decode raw bytes, dropping a leading BOM of the same encoding.
///
/// Malformed sequences are an error rather than being replaced, so a file
/// saved in a different encoding fails loudly.
pub fn decode_bytes<'a>(
    bytes: &'a [u8],
    encoding: &'static Encoding,
    source_name: &str,
) -> Result<Cow<'a, str>> {
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(IngestError::Decode {
            source_name: source_name.to_string(),
            encoding: encoding.name(),
        });
    }
    Ok(text)
}
