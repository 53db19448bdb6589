// ============================================================
// Layer 6 - Partition Store
// ============================================================
// Writes a train/test pair to a fixed layout:
//
//   <base_path>/
//     raw/
//       train.csv
//       test.csv
//
// Both files are UTF-8, comma-delimited, with a header row and
// no row-index column. `raw/` is created if missing and reused
// if present.
//
// The two writes are not atomic: a failure on test.csv leaves
// train.csv in place.
//
// Reference: csv crate documentation
//            Rust Book §12 (I/O and File Handling)

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::domain::error::{IngestError, IngestResult};
use crate::domain::table::Table;
use crate::domain::traits::PartitionSink;
use crate::infra::logging::LogErr;

pub const RAW_DIR: &str = "raw";
pub const TRAIN_FILE: &str = "train.csv";
pub const TEST_FILE: &str = "test.csv";

/// Writes partitions under `<base_path>/raw`.
pub struct PartitionStore {
    base_path: PathBuf,
}

impl PartitionStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    /// Directory the CSV files land in
    pub fn raw_dir(&self) -> PathBuf {
        self.base_path.join(RAW_DIR)
    }

    fn write_all(&self, train: &Table, test: &Table) -> IngestResult<PathBuf> {
        let raw = self.raw_dir();
        fs::create_dir_all(&raw).map_err(|e| IngestError::persistence(&raw, e))?;

        write_csv(&raw.join(TRAIN_FILE), train)?;
        write_csv(&raw.join(TEST_FILE), test)?;
        Ok(raw)
    }
}

impl PartitionSink for PartitionStore {
    fn save(&self, train: &Table, test: &Table) -> IngestResult<PathBuf> {
        let raw = self
            .write_all(train, test)
            .log_err(|| format!("Error saving data to '{}'", self.raw_dir().display()))?;

        tracing::info!("Data saved successfully to {}", raw.display());
        Ok(raw)
    }
}

/// Serialise one table: header first, then every row.
fn write_csv(path: &Path, table: &Table) -> IngestResult<()> {
    let to_err = |e: io::Error| IngestError::persistence(path, e);

    let mut writer = csv::Writer::from_path(path).map_err(|e| to_err(e.into()))?;
    writer.write_record(table.columns()).map_err(|e| to_err(e.into()))?;
    for row in table.rows() {
        writer.write_record(row).map_err(|e| to_err(e.into()))?;
    }
    writer.flush().map_err(to_err)?;

    tracing::debug!("Wrote {} rows to '{}'", table.len(), path.display());
    Ok(())
}
