// ============================================================
// Layer 3 - Pipeline Parameters
// ============================================================
// Parameters are a nested mapping: stage name → option → value.
// They are loaded once at start-up and only read afterwards.
//
// Two ways to obtain them, one pipeline:
//   1. From a YAML file        (infra::params_store::load_params)
//   2. From compiled-in values (Parameters::defaults)
//
// The ingestion stage reads its own section into a typed
// IngestParams value:
//
//   data_ingestion:
//     test_size: 0.2          # required
//     seed: 42                # optional
//     schema:                 # optional
//       drop: ["Unnamed: 2", "Unnamed: 3", "Unnamed: 4"]
//       rename:
//         - { from: v1, to: target }
//         - { from: v2, to: text }
//
// Reference: serde / serde_yaml crate documentation

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::domain::error::{IngestError, IngestResult};

/// Section name read by the ingestion pipeline
pub const INGESTION_SECTION: &str = "data_ingestion";

/// Seed used for the train/test shuffle unless overridden
pub const DEFAULT_SEED: u64 = 42;

/// Test fraction used when no parameter file is consulted
pub const DEFAULT_TEST_SIZE: f64 = 0.2;

// ─── Parameters ───────────────────────────────────────────────────────────────
/// The whole parameter document plus where it came from.
#[derive(Debug, Clone)]
pub struct Parameters {
    /// File path, or "<defaults>" for the compiled-in set
    origin: String,
    root:   Value,
}

impl Parameters {
    pub fn new(origin: impl Into<String>, root: Value) -> Self {
        Self { origin: origin.into(), root }
    }

    /// The compiled-in parameter set used by `--use-defaults`.
    pub fn defaults() -> Self {
        let mut section = serde_yaml::Mapping::new();
        section.insert("test_size".into(), DEFAULT_TEST_SIZE.into());

        let mut root = serde_yaml::Mapping::new();
        root.insert(INGESTION_SECTION.into(), Value::Mapping(section));

        Self::new("<defaults>", Value::Mapping(root))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Look up a value by dotted key, e.g. "data_ingestion.test_size".
    pub fn get(&self, dotted: &str) -> Option<&Value> {
        dotted
            .split('.')
            .try_fold(&self.root, |node, key| node.as_mapping()?.get(key))
    }

    /// Extract the typed ingestion section.
    /// Missing section, missing `test_size`, or wrong types are config errors.
    pub fn ingestion(&self) -> IngestResult<IngestParams> {
        let section = self.get(INGESTION_SECTION).ok_or_else(|| {
            IngestError::config(&self.origin, format!("missing section '{INGESTION_SECTION}'"))
        })?;

        serde_yaml::from_value(section.clone()).map_err(|e| {
            IngestError::config(&self.origin, format!("invalid '{INGESTION_SECTION}' section: {e}"))
        })
    }
}

// ─── IngestParams ─────────────────────────────────────────────────────────────
/// Typed options for the ingestion stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestParams {
    /// Fraction of rows assigned to the test partition, in (0, 1)
    pub test_size: f64,

    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default)]
    pub schema: SchemaMapping,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for IngestParams {
    fn default() -> Self {
        Self {
            test_size: DEFAULT_TEST_SIZE,
            seed:      DEFAULT_SEED,
            schema:    SchemaMapping::default(),
        }
    }
}

// ─── SchemaMapping ────────────────────────────────────────────────────────────
/// Source-column → canonical-column mapping plus the columns to discard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaMapping {
    /// Columns removed before renaming; each must be present
    pub drop: Vec<String>,

    /// Renames applied after dropping; each `from` must be present
    pub rename: Vec<ColumnRename>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRename {
    pub from: String,
    pub to:   String,
}

impl Default for SchemaMapping {
    /// The spam dataset layout: `v1` label, `v2` message, three empty trailing columns.
    fn default() -> Self {
        Self {
            drop: vec![
                "Unnamed: 2".to_string(),
                "Unnamed: 3".to_string(),
                "Unnamed: 4".to_string(),
            ],
            rename: vec![
                ColumnRename { from: "v1".to_string(), to: "target".to_string() },
                ColumnRename { from: "v2".to_string(), to: "text".to_string() },
            ],
        }
    }
}
