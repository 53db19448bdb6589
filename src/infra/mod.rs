// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Filesystem and process-level concerns used by the pipeline:
//
//   logging.rs         - console + file log sinks behind an
//                        explicit LogContext, and the LogErr
//                        "log then propagate" helper
//
//   params_store.rs    - reads params.yaml into Parameters
//
//   partition_store.rs - writes raw/train.csv and raw/test.csv
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// Log sinks and the LogErr extension trait
pub mod logging;

/// YAML parameter file loading
pub mod params_store;

/// Train/test CSV persistence
pub mod partition_store;
