// ============================================================
// Layer 1: CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `extract` and `report`, and
// their flags.
//
// clap's derive macros generate help text, missing-argument
// errors, and string → type conversion (OutputFormat parses
// through its FromStr impl).
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::extract_use_case::ExtractConfig;
use crate::application::report_use_case::ReportConfig;
use crate::infra::record_writer::OutputFormat;

/// The two top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract one metadata record per .txt book and print them
    Extract(ExtractArgs),

    /// Extract records and print corpus-level statistics
    Report(ReportArgs),
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Directory containing the .txt books
    #[arg(long, default_value = "gutenberg")]
    pub books_dir: String,

    /// Output encoding: json or csv
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Write records to this file instead of stdout
    #[arg(long)]
    pub output: Option<String>,
}

/// The application layer never sees clap types
impl From<ExtractArgs> for ExtractConfig {
    fn from(a: ExtractArgs) -> Self {
        ExtractConfig {
            books_dir: a.books_dir,
            format:    a.format,
            output:    a.output,
        }
    }
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Directory containing the .txt books
    #[arg(long, default_value = "gutenberg")]
    pub books_dir: String,

    /// Print the report as pretty JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl From<&ReportArgs> for ReportConfig {
    fn from(a: &ReportArgs) -> Self {
        ReportConfig { books_dir: a.books_dir.clone() }
    }
}
