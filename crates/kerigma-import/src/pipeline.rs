//! Person import pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Decode**: Check the file type and decode the base64 data URL
//! 2. **Detect**: Pick the field delimiter from a sample of the content
//! 3. **Map**: Resolve the header line into canonical person fields
//! 4. **Rows**: Coerce and insert each data line, one at a time
//!
//! A failed row is recorded in the report and never aborts the run; only
//! file-level problems (bad payload, empty content, unusable header)
//! surface as errors.

use std::time::Instant;

use tracing::{info, info_span, warn};

use kerigma_ingest::{
    DETECTION_SAMPLE_LINES, HeaderMap, IngestError, content_lines, decode_payload,
    detect_delimiter, ensure_delimited_text, split_line,
};
use kerigma_model::{ImportReport, ImportRequest};

use crate::error::Result;
use crate::row::build_person;
use crate::store::PersonStore;

/// Runs a full import from an upload request into `store`.
///
/// # Errors
///
/// Returns an error only for whole-file rejections: an unsupported file
/// type, an undecodable or oversized payload, a file with no content, or
/// a header without a recognizable name column. Row-level problems land
/// in the returned [`ImportReport`] instead.
pub fn run_import(request: &ImportRequest, store: &mut dyn PersonStore) -> Result<ImportReport> {
    let span = info_span!("import", filename = %request.filename);
    let _guard = span.enter();

    ensure_delimited_text(&request.filename, &request.mimetype)?;
    let text = decode_payload(&request.file)?;
    import_text(&text, store)
}

/// Imports already-decoded delimited text into `store`.
///
/// Line numbers in the report count from the header: the header line is 1,
/// the first data line is 2. Blank lines are dropped before counting.
pub fn import_text(text: &str, store: &mut dyn PersonStore) -> Result<ImportReport> {
    let start = Instant::now();

    let lines = content_lines(text);
    if lines.is_empty() {
        return Err(IngestError::EmptyPayload.into());
    }

    let sample = &lines[..lines.len().min(DETECTION_SAMPLE_LINES)];
    let delimiter = detect_delimiter(sample);
    let header_cells = split_line(lines[0], delimiter);
    let header = HeaderMap::resolve(&header_cells)?;
    info!(
        delimiter = %delimiter.escape_debug(),
        columns = header.len(),
        mapped = header.mapped_count(),
        rows = lines.len() - 1,
        "header resolved"
    );

    let mut report = ImportReport::new();
    for (index, line) in lines.iter().enumerate().skip(1) {
        let row = index + 1;
        let cells = split_line(line, delimiter);
        match build_person(&cells, &header) {
            Ok(person) => match store.insert(&person) {
                Ok(()) => report.record_success(),
                Err(error) => {
                    warn!(row, %error, "row rejected by store");
                    report.record_failure(row, error.to_string(), Some((*line).to_string()));
                }
            },
            Err(error) => {
                warn!(row, %error, "row failed validation");
                report.record_failure(row, error.to_string(), Some((*line).to_string()));
            }
        }
    }

    info!(
        success = report.success,
        errors = report.errors,
        duration_ms = start.elapsed().as_millis(),
        "import complete"
    );
    Ok(report)
}
