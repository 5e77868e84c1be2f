use std::path::PathBuf;

use kerigma_model::ImportResponse;

/// Everything the summary printer and exit-code logic need about one run.
#[derive(Debug)]
pub struct ImportOutcome {
    pub filename: String,
    pub response: ImportResponse,
    pub output: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub dry_run: bool,
}

impl ImportOutcome {
    /// The whole file was refused before row processing.
    pub fn is_rejection(&self) -> bool {
        self.response.is_rejection()
    }

    /// The file was accepted but at least one row failed.
    pub fn has_failures(&self) -> bool {
        !self.is_rejection() && self.response.errors > 0
    }
}
