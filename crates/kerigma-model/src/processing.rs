use serde::{Deserialize, Serialize};

use crate::report::{ImportReport, RowIssue};

/// Upload body as produced by the import form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// `data:<mimetype>;base64,<payload>` URL with the file content.
    pub file: String,
    pub filename: String,
    pub mimetype: String,
}

/// Response body for an import call.
///
/// A run that reached the row loop reports its counts with `error` unset.
/// A fatal precondition produces the rejection envelope instead: `error`
/// set, `success` 0, `errors` 1 and a single row-0 detail entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub success: usize,
    pub errors: usize,
    pub details: Vec<RowIssue>,
}

impl ImportResponse {
    /// Wraps a finished report.
    pub fn completed(report: ImportReport) -> Self {
        Self {
            error: None,
            success: report.success,
            errors: report.errors,
            details: report.details,
        }
    }

    /// Builds the rejection envelope for an import that never reached row
    /// processing.
    pub fn rejected(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            error: Some(message.clone()),
            success: 0,
            errors: 1,
            details: vec![RowIssue {
                row: 0,
                error: message,
                data: None,
            }],
        }
    }

    pub fn is_rejection(&self) -> bool {
        self.error.is_some()
    }
}
