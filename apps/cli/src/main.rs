//! # prodcode
//!
//! Command line front end for prodcode-core.
//!
//! ## Usage
//! ```text
//! prodcode detect 748196000441
//! prodcode validate isbn 978-0-306-40615-7
//! prodcode expand 02345673
//! prodcode --format json suppress 023456000073
//! ```
//!
//! ## Exit Status
//! ```text
//! ┌────────┬───────────────────────────────────────────────────────────────┐
//! │ 0      │ valid / detected / converted                                  │
//! │ 1      │ checksum mismatch, no format matched, nothing to suppress     │
//! │ 2      │ malformed input (length, characters)                          │
//! └────────┴───────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod report;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prodcode_core::{
    expand_upc_e, suppress_upc_a, validate_ean, validate_isbn, validate_upc, validate_upc_e,
    CodeError, CodeType, Detector,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, OutputFormat};
use crate::report::Report;

#[derive(Parser)]
#[command(name = "prodcode", version)]
#[command(about = "Validate, detect and convert UPC-A, UPC-E, EAN-13 and ISBN codes")]
struct Cli {
    /// Output format (default: $PRODCODE_FORMAT, else text)
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Formats `detect` may answer with, comma-separated (default: $PRODCODE_FORMATS, else all)
    #[arg(long, value_delimiter = ',', global = true)]
    formats: Option<Vec<CodeType>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Identify which format a code is
    Detect { code: String },

    /// Check a code against one format
    Validate {
        /// upc-a, upc-e, ean or isbn
        #[arg(value_name = "TYPE")]
        kind: CodeType,
        code: String,
    },

    /// Expand a 6, 7 or 8 digit UPC-E to UPC-A
    Expand { code: String },

    /// Compress a UPC-A to its 8 digit UPC-E form
    Suppress { code: String },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = CliConfig::load()
        .and_then(|config| config.with_overrides(cli.format, cli.formats))
        .context("Failed to load configuration")?;

    init_tracing(&config.log_filter);
    debug!(?config, "configuration loaded");

    let report = run(&cli.command, &config);
    info!(status = report.exit_status(), "command finished");

    match config.output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", json);
        }
        OutputFormat::Text if report.is_failure() => eprintln!("{}", report),
        OutputFormat::Text => println!("{}", report),
    }

    Ok(ExitCode::from(report.exit_status()))
}

/// Initializes the tracing subscriber on stderr.
///
/// `RUST_LOG` wins; otherwise the configured filter applies.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: &Command, config: &CliConfig) -> Report {
    match command {
        Command::Detect { code } => match Detector::new(config.detector_config()).detect(code) {
            Ok(detection) => Report::detected(detection),
            Err(err) => Report::failed(CodeError::from(err)),
        },
        Command::Validate { kind, code } => validate(*kind, code)
            .unwrap_or_else(Report::failed),
        Command::Expand { code } => convert(code, CodeType::UpcE, CodeType::UpcA, |c| {
            expand_upc_e(c).map_err(CodeError::from)
        }),
        Command::Suppress { code } => convert(code, CodeType::UpcA, CodeType::UpcE, |c| {
            suppress_upc_a(c).map_err(CodeError::from)
        }),
    }
}

fn validate(kind: CodeType, code: &str) -> Result<Report, CodeError> {
    let (valid, isbn_parts) = match kind {
        CodeType::UpcA => (validate_upc(code)?, None),
        CodeType::UpcE => (validate_upc_e(code)?, None),
        CodeType::Ean => (validate_ean(code)?, None),
        CodeType::Isbn => {
            let result = validate_isbn(code)?;
            (result.valid, result.parts)
        }
    };

    Ok(Report::Validated {
        code_type: kind,
        code: code.trim().to_string(),
        valid,
        isbn_parts,
    })
}

fn convert(
    code: &str,
    from: CodeType,
    to: CodeType,
    op: impl Fn(&str) -> Result<String, CodeError>,
) -> Report {
    match op(code) {
        Ok(output) => Report::Converted {
            from,
            to,
            input: code.trim().to_string(),
            output,
        },
        Err(err) => Report::failed(err),
    }
}
