//! End-to-end import tests, from upload payload to stored records.

use kerigma_import::{GENERATED_EMAIL_NOTE, JsonlStore, MemoryStore, import_text, run_import};
use kerigma_ingest::encode_data_url;
use kerigma_model::{ImportRequest, ImportResponse, TipoPessoa};

const SEMICOLON_UPLOAD: &str = "\
Nome;E-mail;Tipo;Data de Nascimento
Ana Souza;ana@exemplo.com;Membro;10/05/1990
João Lima;;Visitante;1985-03-02
X;x@y.z;Membro;01/01/2000
";

fn csv_request(filename: &str, content: &str) -> ImportRequest {
    ImportRequest {
        file: encode_data_url("text/csv", content.as_bytes()),
        filename: filename.to_string(),
        mimetype: "text/csv".to_string(),
    }
}

#[test]
fn test_semicolon_upload_end_to_end() {
    let request = csv_request("pessoas.csv", SEMICOLON_UPLOAD);
    let mut store = MemoryStore::new();
    let report = run_import(&request, &mut store).expect("import runs");

    assert_eq!(report.success, 2);
    assert_eq!(report.errors, 1);
    assert_eq!(report.details.len(), 1);
    assert_eq!(report.details[0].row, 4);
    assert_eq!(
        report.details[0].error,
        "Nome completo é obrigatório e deve ter pelo menos 2 caracteres"
    );
    assert_eq!(
        report.details[0].data.as_deref(),
        Some("X;x@y.z;Membro;01/01/2000")
    );

    let records = store.records();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].nome_completo, "Ana Souza");
    assert_eq!(records[0].email, "ana@exemplo.com");
    assert_eq!(records[0].tipo_pessoa, Some(TipoPessoa::Membro));
    assert_eq!(records[0].data_nascimento.as_deref(), Some("1990-05-10"));
    assert_eq!(records[0].estado_espiritual, "interessado");
    assert!(records[0].observacoes.is_none());

    assert_eq!(records[1].nome_completo, "João Lima");
    assert!(records[1].email.starts_with("joao.lima+"));
    assert!(records[1].email.ends_with("@noemail.kerigma.local"));
    assert_eq!(records[1].tipo_pessoa, Some(TipoPessoa::Visitante));
    assert_eq!(records[1].data_nascimento.as_deref(), Some("1985-03-02"));
    assert_eq!(records[1].observacoes.as_deref(), Some(GENERATED_EMAIL_NOTE));
}

#[test]
fn test_report_envelope_snapshot() {
    let mut store = MemoryStore::new();
    let report = import_text(SEMICOLON_UPLOAD, &mut store).expect("import runs");
    let response = ImportResponse::completed(report);
    let json = serde_json::to_string_pretty(&response).expect("serialize response");
    insta::assert_snapshot!("semicolon_report_envelope", json);
}

#[test]
fn test_missing_name_column_rejects_the_file() {
    let upload = "E-mail;Telefone\nana@x.com;11999990000\n";
    let mut store = MemoryStore::new();
    let error = import_text(upload, &mut store).expect_err("no name column");
    assert!(store.is_empty(), "nothing may be inserted on rejection");

    let response = ImportResponse::rejected(error.to_string());
    assert!(response.is_rejection());
    assert_eq!(response.success, 0);
    assert_eq!(response.errors, 1);
    assert_eq!(response.details[0].row, 0);
    let json = serde_json::to_string_pretty(&response).expect("serialize response");
    insta::assert_snapshot!("missing_name_rejection", json);
}

#[test]
fn test_row_failures_are_isolated() {
    let upload = "\
Nome,Email
A,a@x.com
Bianca Reis,bianca@x.com
B,b@x.com
Caio Nunes,caio@x.com
";
    let mut store = MemoryStore::new();
    let report = import_text(upload, &mut store).expect("import runs");

    assert_eq!(report.success, 2);
    assert_eq!(report.errors, 2);
    assert_eq!(report.details[0].row, 2);
    assert_eq!(report.details[1].row, 4);

    let names: Vec<&str> = store
        .records()
        .iter()
        .map(|record| record.nome_completo.as_str())
        .collect();
    assert_eq!(names, vec!["Bianca Reis", "Caio Nunes"]);
}

#[test]
fn test_placeholder_emails_are_unique() {
    let upload = "Nome;Email\nMaria Souza;\nMaria Souza;\n";
    let mut store = MemoryStore::new();
    let report = import_text(upload, &mut store).expect("import runs");

    assert_eq!(report.success, 2);
    let records = store.records();
    assert!(records[0].email.starts_with("maria.souza+"));
    assert!(records[1].email.starts_with("maria.souza+"));
    assert_ne!(records[0].email, records[1].email);
}

#[test]
fn test_duplicate_email_is_a_row_error() {
    let upload = "Nome;Email\nAna Reis;ana@x.com\nBia Reis;ana@x.com\n";
    let mut store = MemoryStore::new().with_unique_emails();
    let report = import_text(upload, &mut store).expect("import runs");

    assert_eq!(report.success, 1);
    assert_eq!(report.errors, 1);
    assert_eq!(report.details[0].row, 3);
    assert!(report.details[0].error.contains("registro duplicado"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_spreadsheet_upload_is_rejected() {
    let request = ImportRequest {
        file: encode_data_url("application/octet-stream", b"PK\x03\x04"),
        filename: "pessoas.xlsx".to_string(),
        mimetype: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string(),
    };
    let mut store = MemoryStore::new();
    let error = run_import(&request, &mut store).expect_err("spreadsheet rejected");
    assert!(error.to_string().contains("Salve a planilha como CSV"));
    assert!(store.is_empty());
}

#[test]
fn test_empty_upload_is_rejected() {
    let request = csv_request("vazio.csv", "\n   \n");
    let mut store = MemoryStore::new();
    let error = run_import(&request, &mut store).expect_err("empty payload rejected");
    assert_eq!(error.to_string(), "Arquivo vazio ou sem conteúdo");
}

#[test]
fn test_quoted_fields_survive_the_pipeline() {
    let upload = "Nome,Observações\n\"Silva, Ana\",\"gosta de música, canto\"\n";
    let mut store = MemoryStore::new();
    let report = import_text(upload, &mut store).expect("import runs");

    assert_eq!(report.success, 1);
    let record = &store.records()[0];
    assert_eq!(record.nome_completo, "Silva, Ana");
    assert!(record.email.starts_with("silva.ana+"));
    assert_eq!(
        record.observacoes.as_deref(),
        Some("gosta de música, canto | Email gerado automaticamente na importação")
    );
}

#[test]
fn test_jsonl_store_collects_valid_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("import.jsonl");
    let mut store = JsonlStore::open(&path).expect("open store");

    let report = import_text(SEMICOLON_UPLOAD, &mut store).expect("import runs");
    store.flush().expect("flush");

    assert_eq!(report.success, 2);
    assert_eq!(store.written(), 2);

    let content = std::fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).expect("valid json line");
    assert_eq!(first["nome_completo"], "Ana Souza");
    assert_eq!(first["data_nascimento"], "1990-05-10");
    assert_eq!(first["tipo_pessoa"], "membro");
    assert!(first.get("telefone").is_none(), "unset fields are omitted");
}
