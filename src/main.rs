mod application;
mod cli;
mod data;
mod domain;
mod infra;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use infra::logging::{LogContext, LogErr};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logs = match LogContext::init(&cli.log_dir) {
        Ok(logs) => logs,
        Err(e) => {
            eprintln!("Cannot set up logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = logs.scope(|| {
        if let Some(file) = logs.log_file() {
            tracing::debug!("Appending log to {}", file.display());
        }
        cli.run().log_err(|| "Error in data ingestion pipeline")
    });

    // Flushes the file sink before exit
    drop(logs);

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
