pub mod person;
pub mod processing;
pub mod report;

pub use person::{CanonicalField, PersonRecord, Situacao, TipoPessoa};
pub use processing::{ImportRequest, ImportResponse};
pub use report::{ImportReport, RowIssue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes() {
        let mut report = ImportReport::new();
        report.record_success();
        report.record_failure(2, "Nome completo é obrigatório", None);
        let response = ImportResponse::completed(report);
        let json = serde_json::to_string(&response).expect("serialize response");
        let round: ImportResponse = serde_json::from_str(&json).expect("deserialize response");
        assert_eq!(round.success, 1);
        assert_eq!(round.errors, 1);
        assert!(round.error.is_none());
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse response");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn rejection_envelope_shape() {
        let response = ImportResponse::rejected("Arquivo vazio ou sem conteúdo");
        assert!(response.is_rejection());
        assert_eq!(response.success, 0);
        assert_eq!(response.errors, 1);
        assert_eq!(response.details.len(), 1);
        assert_eq!(response.details[0].row, 0);
        assert_eq!(response.details[0].error, "Arquivo vazio ou sem conteúdo");
        assert!(response.details[0].data.is_none());
    }
}
