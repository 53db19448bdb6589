// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Defines the `ingest` subcommand and its flags.
//
// Two parameter modes share one pipeline:
//   --params <file>   read data_ingestion.* from YAML (default params.yaml)
//   --use-defaults    skip the file and use the compiled-in values
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::ingest_use_case::{IngestConfig, DEFAULT_SOURCE_URI};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch, clean and split the dataset into raw/train.csv and raw/test.csv
    Ingest(IngestArgs),
}

/// All arguments for the `ingest` command.
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// YAML parameter file providing data_ingestion.test_size
    #[arg(long, default_value = "params.yaml", conflicts_with = "use_defaults")]
    pub params: PathBuf,

    /// Ignore the parameter file and use test_size = 0.2, seed = 42
    #[arg(long)]
    pub use_defaults: bool,

    /// CSV source: http(s) URL, file:// URI or local path
    #[arg(long, default_value = DEFAULT_SOURCE_URI)]
    pub source: String,

    /// Base directory; partitions are written under <base-path>/raw/
    #[arg(long, default_value = "./data")]
    pub base_path: PathBuf,

    /// Give up on the HTTP download after this many seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

/// The application layer never sees clap types.
impl From<IngestArgs> for IngestConfig {
    fn from(a: IngestArgs) -> Self {
        IngestConfig {
            params_path:  (!a.use_defaults).then_some(a.params),
            source_uri:   a.source,
            base_path:    a.base_path,
            timeout_secs: a.timeout_secs,
        }
    }
}
