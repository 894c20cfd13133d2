// ============================================================
// Layer 1: CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and hands the work to Layer 2 (application).
//
//   1. `extract` → records as JSON or CSV (stdout or --output)
//   2. `report`  → corpus statistics as text or JSON
//
// Logs go to stderr, so stdout carries only the requested data.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExtractArgs, ReportArgs};

#[derive(Parser, Debug)]
#[command(
    name = "book-meta",
    version,
    about = "Extract header metadata and body statistics from plain-text books."
)]
pub struct Cli {
    /// The subcommand to run (extract or report)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case. Routing only.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Extract(args) => run_extract(args),
            Commands::Report(args)  => run_report(args),
        }
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    use crate::application::extract_use_case::ExtractUseCase;

    tracing::info!("Extracting records from: {}", args.books_dir);

    let records = ExtractUseCase::new(args.into()).execute()?;
    tracing::info!("Done: {} records", records.len());
    Ok(())
}

fn run_report(args: ReportArgs) -> Result<()> {
    use crate::application::report_use_case::ReportUseCase;

    let report = ReportUseCase::new((&args).into()).execute()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
