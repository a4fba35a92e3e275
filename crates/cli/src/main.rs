//! openapi-refcheck CLI
//!
//! Command-line interface for checking `$ref` consistency of OpenAPI documents.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::*;
use openapi_refcheck_checker::{check_file, FileReport};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DOCUMENTATION: &str = "\
Verify the consistency of references in OpenAPI documents.

It checks that:
  * Each `$ref` pointer resolves to an existing location in the document.
  * Each schema declared under `components.schemas` is referenced at least once.

Exits with status 1 if any error is found in any file.";

#[derive(Parser)]
#[command(name = "openapi-refcheck")]
#[command(version, about = "Check $ref consistency of OpenAPI JSON documents")]
#[command(long_about = DOCUMENTATION)]
#[command(disable_help_flag = true)]
#[command(after_help = "EXAMPLES:\n  \
    # Check a single document\n  \
    openapi-refcheck openapi.json\n\n  \
    # Check several documents, with debug diagnostics on stderr\n  \
    openapi-refcheck --verbose api-v1.json api-v2.json")]
struct Cli {
    /// OpenAPI JSON documents to check
    files: Vec<PathBuf>,

    /// Enable debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print usage and documentation
    #[arg(short, long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.files.is_empty() {
        Cli::command()
            .print_long_help()
            .context("Failed to print usage")?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut total_errors = 0;
    for path in &cli.files {
        total_errors += check_command(path)?;
    }

    if total_errors != 0 {
        println!(
            "{}",
            format!("Check failed, {} errors found", total_errors)
                .red()
                .bold()
        );
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Check one file, print its report, and return its error count
fn check_command(path: &Path) -> Result<usize> {
    println!("checking file '{}'", path.display().to_string().cyan());

    let report = check_file(path)
        .with_context(|| format!("Failed to check document {}", path.display()))?;

    print_report(&report);
    Ok(report.error_count())
}

fn print_report(report: &FileReport) {
    println!("found {} unique refs", report.ref_count);

    for finding in &report.findings {
        tracing::debug!(kind = finding.kind(), "finding");
        println!("\t{}: {}", "ERROR".red(), finding);
    }
}
