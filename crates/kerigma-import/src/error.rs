//! Error types for the person import pipeline.
//!
//! Three classes, matching how failures propagate: [`ImportError`] aborts
//! the whole call before any row runs, [`RowError`] fails one row while the
//! loop continues, and [`StoreError`] is the store's own rejection of one
//! insert — also row-scoped. Row-scoped displays are Portuguese because
//! they land verbatim in the per-row diagnostics.

use thiserror::Error;

use kerigma_ingest::IngestError;

/// Fatal errors that reject an import before row processing.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Payload or header precondition failed.
    #[error(transparent)]
    Payload(#[from] IngestError),
}

/// Validation failure scoped to a single input row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    /// Name cell absent or shorter than two characters.
    #[error("Nome completo é obrigatório e deve ter pelo menos 2 caracteres")]
    InvalidName,
}

/// Failure surfaced by the person-records store for one insert.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The unique-email constraint rejected the record.
    #[error("registro duplicado: já existe uma pessoa com o email {email}")]
    DuplicateEmail { email: String },

    /// Writing to the backing file failed.
    #[error("falha ao gravar registro: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// The record could not be serialized for persistence.
    #[error("falha ao serializar registro: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;
