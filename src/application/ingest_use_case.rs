// ============================================================
// Layer 2 - IngestUseCase
// ============================================================
// Runs the ingestion pipeline once, in order:
//
//   Step 1: Resolve parameters     (Layer 6 - infra, or defaults)
//   Step 2: Load the source CSV    (Layer 4 - data)
//   Step 3: Clean the columns      (Layer 4 - data)
//   Step 4: Split train/test       (Layer 4 - data)
//   Step 5: Save both partitions   (Layer 6 - infra)
//
// Each step's output is the next step's input. The first failure
// stops the run; every stage has already logged its own context
// by the time the error reaches this layer.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::{load_data, CsvSource},
    preprocessor::Preprocessor,
    splitter::split_train_test,
};
use crate::domain::{
    error::IngestResult,
    params::{IngestParams, Parameters},
    table::Table,
    traits::{DatasetSource, PartitionSink},
};
use crate::infra::{
    logging::LogErr,
    params_store::load_params,
    partition_store::PartitionStore,
};

/// Dataset fetched when no `--source` is given
pub const DEFAULT_SOURCE_URI: &str =
    "https://raw.githubusercontent.com/vikashishere/Datasets/main/spam.csv";

// ─── Ingestion Configuration ─────────────────────────────────────────────────
/// Everything a single run needs besides the logger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// YAML parameter file; `None` selects the compiled-in defaults
    pub params_path:  Option<PathBuf>,
    pub source_uri:   String,
    /// Partitions go to `<base_path>/raw/`
    pub base_path:    PathBuf,
    pub timeout_secs: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            params_path:  Some(PathBuf::from("params.yaml")),
            source_uri:   DEFAULT_SOURCE_URI.to_string(),
            base_path:    PathBuf::from("./data"),
            timeout_secs: 30,
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub train_rows: usize,
    pub test_rows:  usize,
    pub output_dir: PathBuf,
}

// ─── IngestUseCase ────────────────────────────────────────────────────────────
pub struct IngestUseCase {
    config: IngestConfig,
}

impl IngestUseCase {
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Run against the configured CSV source and output directory.
    pub fn execute(&self) -> Result<IngestReport> {
        let source = CsvSource::new(
            &self.config.source_uri,
            Duration::from_secs(self.config.timeout_secs),
        );
        let sink = PartitionStore::new(&self.config.base_path);

        self.execute_with(&source, &sink)
    }

    /// Run with caller-supplied I/O edges (parameters still come from config).
    pub fn execute_with(
        &self,
        source: &dyn DatasetSource,
        sink:   &dyn PartitionSink,
    ) -> Result<IngestReport> {
        let params = self.resolve_params()?;
        self.run(&params, source, sink)
    }

    // ── Step 1: Parameters ───────────────────────────────────────────────────
    // Loaded before any I/O so a bad parameter file does no work at all.
    fn resolve_params(&self) -> IngestResult<IngestParams> {
        let params = match &self.config.params_path {
            Some(path) => load_params(path)?,
            None => {
                tracing::info!("Using default parameters");
                Parameters::defaults()
            }
        };

        let ingestion = params
            .ingestion()
            .log_err(|| format!("Error reading ingestion parameters from {}", params.origin()))?;

        tracing::info!(
            "test_size={} seed={} from {}",
            ingestion.test_size,
            ingestion.seed,
            params.origin()
        );
        Ok(ingestion)
    }

    fn run(
        &self,
        params: &IngestParams,
        source: &dyn DatasetSource,
        sink:   &dyn PartitionSink,
    ) -> Result<IngestReport> {
        // ── Step 2: Load ─────────────────────────────────────────────────────
        let raw = load_data(source)?;

        // ── Step 3: Clean ────────────────────────────────────────────────────
        let cleaned = Preprocessor::new(params.schema.clone()).preprocess(raw)?;

        // ── Steps 4 + 5: Split and persist ───────────────────────────────────
        let report = split_and_save(&cleaned, params.test_size, params.seed, sink)?;

        tracing::info!("Data ingestion completed successfully");
        Ok(report)
    }
}

// ─── Split + Save ────────────────────────────────────────────────────────────
/// Split with `seed` and hand both partitions to `sink`.
/// With a `PartitionStore` sink they land in `<base_path>/raw/{train,test}.csv`.
pub fn split_and_save(
    dataset:   &Table,
    test_size: f64,
    seed:      u64,
    sink:      &dyn PartitionSink,
) -> IngestResult<IngestReport> {
    let (train, test) = split_train_test(dataset, test_size, seed)
        .log_err(|| "Error splitting data")?;

    let output_dir = sink.save(&train, &test)?;

    Ok(IngestReport {
        train_rows: train.len(),
        test_rows:  test.len(),
        output_dir,
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, fs, path::Path};

    use crate::domain::error::IngestError;
    use crate::domain::params::DEFAULT_SEED;
    use crate::infra::logging::tests::Captured;
    use crate::infra::partition_store::{RAW_DIR, TEST_FILE, TRAIN_FILE};

    const SPAM: &str = "v1,v2,,,\nham,\"hi there\",,,\nspam,\"win now\",,,\n";

    /// Source that counts how often it was asked for data
    struct CountingSource {
        table: Table,
        calls: RefCell<usize>,
    }

    impl DatasetSource for CountingSource {
        fn describe(&self) -> String {
            "memory://spam".to_string()
        }

        fn load(&self) -> IngestResult<Table> {
            *self.calls.borrow_mut() += 1;
            Ok(self.table.clone())
        }
    }

    /// Sink that keeps partitions in memory
    #[derive(Default)]
    struct MemorySink {
        saved: RefCell<Option<(Table, Table)>>,
    }

    impl PartitionSink for MemorySink {
        fn save(&self, train: &Table, test: &Table) -> IngestResult<PathBuf> {
            *self.saved.borrow_mut() = Some((train.clone(), test.clone()));
            Ok(PathBuf::from("memory"))
        }
    }

    fn spam_source() -> CountingSource {
        let mut table = Table::new(["v1", "v2", "Unnamed: 2", "Unnamed: 3", "Unnamed: 4"]);
        table.push_row(["ham", "hi there", "", "", ""]);
        table.push_row(["spam", "win now", "", "", ""]);
        CountingSource { table, calls: RefCell::new(0) }
    }

    fn config_with(dir: &Path, params: Option<PathBuf>) -> IngestConfig {
        IngestConfig {
            params_path:  params,
            source_uri:   dir.join("spam.csv").display().to_string(),
            base_path:    dir.join("data"),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_end_to_end_from_local_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("spam.csv"), SPAM).unwrap();
        let params = dir.path().join("params.yaml");
        fs::write(&params, "data_ingestion:\n  test_size: 0.5\n").unwrap();

        let report = IngestUseCase::new(config_with(dir.path(), Some(params)))
            .execute()
            .unwrap();

        assert_eq!((report.train_rows, report.test_rows), (1, 1));
        let raw = dir.path().join("data").join(RAW_DIR);
        assert_eq!(report.output_dir, raw);

        let train = fs::read_to_string(raw.join(TRAIN_FILE)).unwrap();
        let test  = fs::read_to_string(raw.join(TEST_FILE)).unwrap();
        assert!(train.starts_with("target,text\n"));
        assert!(test.starts_with("target,text\n"));

        let mut bodies: Vec<&str> = train.lines().chain(test.lines())
            .filter(|l| *l != "target,text")
            .collect();
        bodies.sort();
        assert_eq!(bodies, vec!["ham,hi there", "spam,win now"]);
    }

    #[test]
    fn test_default_mode_needs_no_params_file() {
        let dir  = tempfile::tempdir().unwrap();
        let sink = MemorySink::default();

        let report = IngestUseCase::new(config_with(dir.path(), None))
            .execute_with(&spam_source(), &sink)
            .unwrap();

        // ceil(2 * 0.2) = 1
        assert_eq!((report.train_rows, report.test_rows), (1, 1));
        let (train, _) = sink.saved.borrow().clone().unwrap();
        assert_eq!(train.columns(), ["target", "text"]);
    }

    #[test]
    fn test_missing_test_size_does_no_work() {
        let dir = tempfile::tempdir().unwrap();
        let params = dir.path().join("params.yaml");
        fs::write(&params, "data_ingestion:\n  seed: 1\n").unwrap();

        let source = spam_source();
        let sink   = MemorySink::default();
        let err = IngestUseCase::new(config_with(dir.path(), Some(params)))
            .execute_with(&source, &sink)
            .unwrap_err();

        assert!(matches!(err.downcast_ref::<IngestError>(), Some(IngestError::Config { .. })));
        assert_eq!(*source.calls.borrow(), 0);
        assert!(sink.saved.borrow().is_none());
    }

    #[test]
    fn test_degenerate_test_size_stops_before_saving() {
        let dir = tempfile::tempdir().unwrap();
        let params = dir.path().join("params.yaml");
        fs::write(&params, "data_ingestion:\n  test_size: 1.0\n").unwrap();

        let sink = MemorySink::default();
        let err = IngestUseCase::new(config_with(dir.path(), Some(params)))
            .execute_with(&spam_source(), &sink)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<IngestError>(),
            Some(IngestError::InvalidTestSize(_))
        ));
        assert!(sink.saved.borrow().is_none());
    }

    #[test]
    fn test_runs_are_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = Table::new(["target", "text"]);
        for i in 0..25 {
            table.push_row(["ham".to_string(), format!("message {i}")]);
        }

        let first  = MemorySink::default();
        let second = MemorySink::default();
        split_and_save(&table, 0.3, DEFAULT_SEED, &first).unwrap();
        split_and_save(&table, 0.3, DEFAULT_SEED, &second).unwrap();
        assert_eq!(*first.saved.borrow(), *second.saved.borrow());

        let store  = PartitionStore::new(dir.path());
        let report = split_and_save(&table, 0.3, DEFAULT_SEED, &store).unwrap();
        assert_eq!((report.train_rows, report.test_rows), (17, 8));
    }

    #[test]
    fn test_empty_dataset_writes_header_only_files() {
        let dir = tempfile::tempdir().unwrap();
        let empty = Table::new(["target", "text"]);

        let store  = PartitionStore::new(dir.path());
        let report = split_and_save(&empty, 0.2, DEFAULT_SEED, &store).unwrap();
        assert_eq!((report.train_rows, report.test_rows), (0, 0));
        assert_eq!(
            fs::read_to_string(report.output_dir.join(TEST_FILE)).unwrap(),
            "target,text\n"
        );
    }

    #[test]
    fn test_stage_failures_are_logged() {
        let dir  = tempfile::tempdir().unwrap();
        let sink = Captured::default();
        let ctx  = sink.context();

        let result = ctx.scope(|| {
            IngestUseCase::new(config_with(dir.path(), None)).execute()
        });

        assert!(result.is_err());
        let text = sink.text();
        assert!(text.contains("Using default parameters"));
        assert!(text.contains("ERROR"));
        assert!(text.contains("spam.csv"));
    }
}
