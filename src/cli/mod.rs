// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and hands off to the
// application layer. Printing the run summary is the only output
// produced here; everything else goes through the log.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, IngestArgs};

#[derive(Parser, Debug)]
#[command(
    name = "data-ingestion",
    version,
    about = "Fetch a CSV dataset, clean its columns, and write train/test partitions."
)]
pub struct Cli {
    /// Directory holding data_ingestion.log (created if missing)
    #[arg(long, global = true, default_value = "log")]
    pub log_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route the subcommand to its use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Ingest(args) => run_ingest(args),
        }
    }
}

fn run_ingest(args: IngestArgs) -> Result<()> {
    use crate::application::ingest_use_case::IngestUseCase;

    tracing::info!("Starting data ingestion from: {}", args.source);

    let report = IngestUseCase::new(args.into()).execute()?;

    println!(
        "Ingestion complete: {} train rows, {} test rows written to {}",
        report.train_rows,
        report.test_rows,
        report.output_dir.display()
    );
    Ok(())
}
