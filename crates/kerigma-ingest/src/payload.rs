//! Upload payload decoding and file-type preconditions.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Maximum accepted decoded payload size: 10 MB.
pub const MAX_PAYLOAD_BYTES: usize = 10 * 1024 * 1024;

const DATA_URL_MARKER: &str = ";base64,";

/// Checks that the declared file type is delimited text.
///
/// The extension decides first: delimited-text extensions pass, binary
/// spreadsheet extensions are rejected with convert-to-CSV guidance. Files
/// without a telling extension fall back to the declared mimetype.
pub fn ensure_delimited_text(filename: &str, mimetype: &str) -> Result<()> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("csv" | "txt" | "tsv") => return Ok(()),
        Some(ext @ ("xls" | "xlsx" | "ods")) => {
            return Err(IngestError::UnsupportedFileType {
                kind: format!(".{ext}"),
            });
        }
        _ => {}
    }

    let mimetype = mimetype.to_ascii_lowercase();
    if mimetype.contains("csv") || mimetype.starts_with("text/") {
        Ok(())
    } else {
        let kind = if mimetype.is_empty() {
            "desconhecido".to_string()
        } else {
            mimetype
        };
        Err(IngestError::UnsupportedFileType { kind })
    }
}

/// Decodes an uploaded `data:` URL (or bare base64 string) into text.
///
/// Invalid UTF-8 sequences are replaced rather than rejected, matching the
/// lenient decoding the upload form applies on its side.
pub fn decode_payload(payload: &str) -> Result<String> {
    let encoded = payload
        .split_once(DATA_URL_MARKER)
        .map_or(payload, |(_, rest)| rest)
        .trim();
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|source| IngestError::InvalidBase64 { source })?;
    if bytes.len() > MAX_PAYLOAD_BYTES {
        return Err(IngestError::PayloadTooLarge {
            limit_mb: MAX_PAYLOAD_BYTES / (1024 * 1024),
        });
    }
    debug!(bytes = bytes.len(), "payload decoded");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Builds the `data:` URL the import request carries.
pub fn encode_data_url(mimetype: &str, bytes: &[u8]) -> String {
    format!("data:{mimetype};base64,{}", STANDARD.encode(bytes))
}

/// Normalizes line endings and drops blank lines, preserving order.
///
/// `\r\n`, `\r` and `\n` all terminate a line; a leading UTF-8 BOM is
/// stripped. Lines that are empty after trimming disappear entirely, so
/// row numbers count only content lines.
pub fn content_lines(text: &str) -> Vec<&str> {
    text.trim_start_matches('\u{feff}')
        .split(['\n', '\r'])
        .filter(|line| !line.trim().is_empty())
        .collect()
}
