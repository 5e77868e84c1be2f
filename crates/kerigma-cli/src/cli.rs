//! CLI argument definitions for the Kerigma Hub importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "kerigma",
    version,
    about = "Kerigma Hub - Import people from spreadsheet exports",
    long_about = "Import people into Kerigma Hub from delimited spreadsheet exports.\n\n\
                  Detects the column delimiter, maps the header spellings\n\
                  congregations actually use onto canonical person fields, and\n\
                  reports every rejected row with its line number."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow row-level values (names, emails) to appear in logs.
    ///
    /// Off by default: imported rows are personal data, and traces are
    /// redacted unless this flag is set.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import people from a delimited file.
    Import(ImportArgs),

    /// List the accepted header spellings for each person field.
    Fields,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the file to import (CSV, TSV or TXT).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Treat FILE as an import request JSON body instead of raw content.
    #[arg(long = "request")]
    pub request: bool,

    /// Append accepted records to this JSON Lines file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the import report JSON to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Validate and report without persisting any record.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit non-zero when any row fails.
    ///
    /// By default the importer exits zero as long as the file itself was
    /// accepted, even if individual rows were rejected. Use this flag in
    /// scripts that must treat a partial import as a failure.
    #[arg(long = "strict")]
    pub strict: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_import_args_parse() {
        let cli = Cli::try_parse_from([
            "kerigma",
            "import",
            "pessoas.csv",
            "--output",
            "pessoas.jsonl",
            "--strict",
        ])
        .expect("parse");
        match cli.command {
            Command::Import(args) => {
                assert_eq!(args.file, PathBuf::from("pessoas.csv"));
                assert_eq!(args.output, Some(PathBuf::from("pessoas.jsonl")));
                assert!(args.strict);
                assert!(!args.dry_run);
                assert!(!args.request);
            }
            Command::Fields => panic!("expected the import subcommand"),
        }
    }

    #[test]
    fn test_global_log_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "kerigma",
            "fields",
            "--log-format",
            "json",
            "--log-data",
        ])
        .expect("parse");
        assert!(matches!(cli.command, Command::Fields));
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(cli.log_data);
    }
}
