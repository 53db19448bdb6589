// ============================================================
// Layer 3 - Core Traits
// ============================================================
// The pipeline talks to its two I/O edges through traits:
//
//   DatasetSource - anything that can produce the raw table
//                   (CsvSource over HTTP or a local file)
//   PartitionSink - anything that can store a train/test pair
//                   (PartitionStore writing raw/train.csv, raw/test.csv)
//
// Tests swap either edge for an in-memory implementation.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::PathBuf;

use crate::domain::error::IngestResult;
use crate::domain::table::Table;

// ─── DatasetSource ────────────────────────────────────────────────────────────
pub trait DatasetSource {
    /// Human-readable location, used in log lines and errors
    fn describe(&self) -> String;

    /// Fetch and parse the whole table.
    fn load(&self) -> IngestResult<Table>;
}

// ─── PartitionSink ────────────────────────────────────────────────────────────
pub trait PartitionSink {
    /// Store both partitions and return the directory they were written to.
    fn save(&self, train: &Table, test: &Table) -> IngestResult<PathBuf>;
}
