//! Ingestion layer for the Kerigma Hub person import.
//!
//! Turns an uploaded payload into lines ready for row processing: base64
//! data-URL decoding and file-type preconditions, quote-aware splitting,
//! delimiter detection over a sample, and resolution of free-form header
//! spellings onto the canonical person fields.

pub mod delimiter;
pub mod error;
pub mod header;
pub mod line;
pub mod payload;
pub mod text;

pub use delimiter::{DELIMITER_CANDIDATES, DETECTION_SAMPLE_LINES, detect_delimiter};
pub use error::{IngestError, Result};
pub use header::{HEADER_SYNONYMS, HeaderMap, canonical_field_for};
pub use line::split_line;
pub use payload::{
    MAX_PAYLOAD_BYTES, content_lines, decode_payload, encode_data_url, ensure_delimited_text,
};
