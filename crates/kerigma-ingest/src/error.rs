//! Error types for import payload ingestion.
//!
//! Every variant here is a fatal precondition: it aborts the import before
//! any row is processed, and its display text becomes the `error` field of
//! the rejection envelope, so the user-facing variants read in Portuguese.

use thiserror::Error;

/// Errors raised while preparing an upload for row processing.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Payload Errors ===
    /// Upload decoded to nothing but whitespace.
    #[error("Arquivo vazio ou sem conteúdo")]
    EmptyPayload,

    /// Payload is not valid base64.
    #[error("Não foi possível decodificar o arquivo enviado")]
    InvalidBase64 {
        #[source]
        source: base64::DecodeError,
    },

    /// Decoded payload exceeds the accepted size.
    #[error("Arquivo excede o limite de {limit_mb} MB")]
    PayloadTooLarge { limit_mb: usize },

    // === File Type Errors ===
    /// Declared type is a binary spreadsheet or otherwise not delimited text.
    #[error(
        "Formato de arquivo não suportado ({kind}). Salve a planilha como CSV e envie novamente"
    )]
    UnsupportedFileType { kind: String },

    // === Header Errors ===
    /// No header cell resolved to the name column.
    #[error(
        "Coluna de nome não encontrada no cabeçalho. O arquivo precisa de uma coluna como \"Nome\" ou \"Nome Completo\""
    )]
    MissingNameColumn,
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::UnsupportedFileType {
            kind: ".xlsx".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Formato de arquivo não suportado (.xlsx). Salve a planilha como CSV e envie novamente"
        );

        let err = IngestError::PayloadTooLarge { limit_mb: 10 };
        assert_eq!(err.to_string(), "Arquivo excede o limite de 10 MB");
    }

    #[test]
    fn test_base64_error_keeps_source() {
        let source = base64::Engine::decode(&base64::engine::general_purpose::STANDARD, "não!")
            .expect_err("invalid base64");
        let err = IngestError::InvalidBase64 { source };
        assert_eq!(
            err.to_string(),
            "Não foi possível decodificar o arquivo enviado"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
