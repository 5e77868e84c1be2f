use serde::{Deserialize, Serialize};

/// One failed input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowIssue {
    /// 1-based line number; the header line counts as 1, so the first data
    /// row reports 2. Fatal (pre-row) errors use 0.
    pub row: usize,
    /// Human-readable reason, suitable for showing to the person fixing the file.
    pub error: String,
    /// The raw offending line, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Aggregate outcome of a single import invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Rows inserted without error.
    pub success: usize,
    /// Rows that failed validation or insertion.
    pub errors: usize,
    /// One entry per failed row, in encounter order.
    pub details: Vec<RowIssue>,
}

impl ImportReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self) {
        self.success += 1;
    }

    pub fn record_failure(&mut self, row: usize, error: impl Into<String>, data: Option<String>) {
        self.errors += 1;
        self.details.push(RowIssue {
            row,
            error: error.into(),
            data,
        });
    }

    pub fn total_rows(&self) -> usize {
        self.success + self.errors
    }

    pub fn has_failures(&self) -> bool {
        self.errors > 0
    }
}
