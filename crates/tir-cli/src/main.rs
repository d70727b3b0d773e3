//! # tir CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tir_cli::areas::{run_areas, AreasArgs};
use tir_cli::catalog::{run_catalog, CatalogArgs};
use tir_cli::draft::{run_draft, DraftArgs};
use tir_cli::review::{run_review, ReviewArgs};
use tir_cli::submit::{run_submit, SubmitArgs};

/// TIR Stack CLI.
///
/// Drives Thematic Implementation Report sessions from the command line:
/// browse areas and the question catalog, prepare drafts, run the
/// advisory readiness review, and submit reports.
#[derive(Parser, Debug)]
#[command(name = "tir", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the thematic areas and their conventions.
    Areas(AreasArgs),

    /// Print the sectioned question catalog.
    Catalog(CatalogArgs),

    /// Emit a report draft skeleton for an area.
    Draft(DraftArgs),

    /// Run the advisory readiness scan over a draft.
    Review(ReviewArgs),

    /// Submit a draft and print the receipt.
    Submit(SubmitArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Areas(args) => run_areas(&args),
        Commands::Catalog(args) => run_catalog(&args),
        Commands::Draft(args) => run_draft(&args),
        Commands::Review(args) => run_review(&args),
        Commands::Submit(args) => run_submit(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
