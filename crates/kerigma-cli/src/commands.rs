use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info};

use kerigma_cli::logging::redact_value;
use kerigma_import::{JsonlStore, MemoryStore, run_import};
use kerigma_ingest::{HEADER_SYNONYMS, encode_data_url};
use kerigma_model::{CanonicalField, ImportRequest, ImportResponse};

use crate::cli::ImportArgs;
use crate::summary::apply_table_style;
use crate::types::ImportOutcome;

pub fn run_import_command(args: &ImportArgs) -> Result<ImportOutcome> {
    let request = if args.request {
        read_request(&args.file)?
    } else {
        build_request(&args.file)?
    };
    debug!(
        filename = %request.filename,
        mimetype = %request.mimetype,
        payload = redact_value(&request.file),
        "request prepared"
    );

    let start = Instant::now();
    let response = execute(&request, args)?;
    info!(
        filename = %request.filename,
        success = response.success,
        errors = response.errors,
        duration_ms = start.elapsed().as_millis(),
        "import finished"
    );

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&response).context("serialize report")?;
        fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    }

    Ok(ImportOutcome {
        filename: request.filename,
        response,
        output: args.output.clone(),
        report_path: args.report.clone(),
        dry_run: args.dry_run,
    })
}

/// Prints the accepted header spellings grouped by canonical field.
pub fn run_fields() {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Accepted headers"]);
    apply_table_style(&mut table);
    for field in CanonicalField::ALL {
        let spellings: Vec<&str> = HEADER_SYNONYMS
            .iter()
            .filter(|(_, target)| *target == field)
            .map(|(spelling, _)| *spelling)
            .collect();
        table.add_row(vec![field.as_str().to_string(), spellings.join(", ")]);
    }
    println!("{table}");
}

/// Runs the import against the store the flags select.
///
/// A fatal import error becomes the rejection envelope rather than a CLI
/// error; `Err` here means the CLI itself failed (opening or flushing the
/// output file).
fn execute(request: &ImportRequest, args: &ImportArgs) -> Result<ImportResponse> {
    let response = match (&args.output, args.dry_run) {
        (Some(path), false) => {
            let mut store = JsonlStore::open(path)
                .with_context(|| format!("open output {}", path.display()))?;
            let result = run_import(request, &mut store);
            store.flush().context("flush output")?;
            match result {
                Ok(report) => ImportResponse::completed(report),
                Err(error) => ImportResponse::rejected(error.to_string()),
            }
        }
        _ => {
            let mut store = MemoryStore::new();
            match run_import(request, &mut store) {
                Ok(report) => ImportResponse::completed(report),
                Err(error) => ImportResponse::rejected(error.to_string()),
            }
        }
    };
    Ok(response)
}

/// Wraps a raw delimited file in the request envelope the importer accepts.
fn build_request(path: &Path) -> Result<ImportRequest> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload.csv")
        .to_string();
    let mimetype = mimetype_for(&filename);
    Ok(ImportRequest {
        file: encode_data_url(&mimetype, &bytes),
        filename,
        mimetype,
    })
}

/// Reads an already-built request JSON body from disk.
fn read_request(path: &Path) -> Result<ImportRequest> {
    let json = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parse request {}", path.display()))
}

fn mimetype_for(filename: &str) -> String {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    let mimetype = match extension.as_deref() {
        Some("csv") => "text/csv",
        Some("tsv") => "text/tab-separated-values",
        Some("txt") => "text/plain",
        Some("xls") => "application/vnd.ms-excel",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("ods") => "application/vnd.oasis.opendocument.spreadsheet",
        _ => "application/octet-stream",
    };
    mimetype.to_string()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn dry_run_args() -> ImportArgs {
        ImportArgs {
            file: PathBuf::from("pessoas.csv"),
            request: false,
            output: None,
            report: None,
            dry_run: true,
            strict: false,
        }
    }

    #[test]
    fn test_mimetype_for_known_extensions() {
        assert_eq!(mimetype_for("pessoas.csv"), "text/csv");
        assert_eq!(mimetype_for("Pessoas.TSV"), "text/tab-separated-values");
        assert_eq!(mimetype_for("notas.txt"), "text/plain");
        assert_eq!(mimetype_for("planilha.xlsx"), "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet");
        assert_eq!(mimetype_for("dump.bin"), "application/octet-stream");
        assert_eq!(mimetype_for("sem-extensao"), "application/octet-stream");
    }

    #[test]
    fn test_execute_reports_counts() {
        let content = "Nome;Email\nAna Souza;ana@x.com\nB;b@x.com\n";
        let request = ImportRequest {
            file: encode_data_url("text/csv", content.as_bytes()),
            filename: "pessoas.csv".to_string(),
            mimetype: "text/csv".to_string(),
        };
        let response = execute(&request, &dry_run_args()).expect("execute");
        let json = serde_json::to_string(&response).expect("serialize");
        insta::assert_snapshot!(json, @r#"{"success":1,"errors":1,"details":[{"row":3,"error":"Nome completo é obrigatório e deve ter pelo menos 2 caracteres","data":"B;b@x.com"}]}"#);
    }

    #[test]
    fn test_execute_wraps_rejections() {
        let request = ImportRequest {
            file: encode_data_url("application/octet-stream", b"PK\x03\x04"),
            filename: "pessoas.xlsx".to_string(),
            mimetype: "application/vnd.ms-excel".to_string(),
        };
        let response = execute(&request, &dry_run_args()).expect("execute");
        assert!(response.is_rejection());
        assert_eq!(response.success, 0);
        assert_eq!(response.errors, 1);
        assert_eq!(response.details[0].row, 0);
    }
}
