use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "pdbview developers",
    version,
    about = "pdbview CLI - Fetch PDB structure files and prepare them as normalized, render-ready point sets for visualization.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download a structure file from the RCSB archive by its PDB identifier.
    Fetch(FetchArgs),
    /// Parse a structure file and emit the normalized point set as JSON.
    Prepare(PrepareArgs),
}

/// Arguments for the `fetch` subcommand.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// The PDB identifier to download (e.g., 1CRN).
    #[arg(value_name = "ID")]
    pub id: String,

    /// Path for the downloaded file. Defaults to stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `prepare` subcommand.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Path to the input structure file, or '-' to read from stdin.
    #[arg(value_name = "INPUT", required_unless_present = "id", conflicts_with = "id")]
    pub input: Option<PathBuf>,

    /// Fetch the structure from the RCSB archive instead of reading a file.
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Path for the JSON output. Defaults to stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}
