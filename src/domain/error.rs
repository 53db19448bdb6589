// ============================================================
// Layer 3 - Ingestion Errors
// ============================================================
// One variant per failure class of the pipeline:
//
//   Config         - parameter file missing, unreadable, malformed,
//                    or missing a required key
//   Acquisition    - source unreachable or not parseable as CSV
//   Schema         - expected columns absent (or unexpected ones left)
//   InvalidTestSize- split fraction outside the open interval (0, 1)
//   Persistence    - output directory or file could not be written
//
// Every variant carries the path / URI / column it failed on so
// the log line alone is enough to locate the problem.
//
// Reference: thiserror crate documentation
//            Rust Book §9 (Recoverable Errors with Result)

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for stage operations
pub type IngestResult<T> = Result<T, IngestError>;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("configuration error in '{path}': {message}")]
    Config { path: String, message: String },

    #[error("cannot acquire data from '{uri}': {message}")]
    Acquisition { uri: String, message: String },

    #[error("schema error on column '{column}': {message}")]
    Schema { column: String, message: String },

    #[error("invalid test_size {0}: must lie strictly between 0 and 1")]
    InvalidTestSize(f64),

    #[error("cannot write '{}': {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    pub fn config(path: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Config { path: path.into(), message: message.to_string() }
    }

    pub fn acquisition(uri: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Acquisition { uri: uri.into(), message: message.to_string() }
    }

    pub fn schema(column: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Schema { column: column.into(), message: message.to_string() }
    }

    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence { path: path.into(), source }
    }
}
