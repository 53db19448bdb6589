// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust types shared by every other layer:
//   - the Table that moves between stages
//   - the Parameters that configure them
//   - the error taxonomy every stage reports with
//   - the traits at the I/O edges
//
// Nothing in here touches the network or the filesystem.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// In-memory tabular dataset
pub mod table;

// Parameter document and typed ingestion options
pub mod params;

// IngestError and the IngestResult alias
pub mod error;

// DatasetSource / PartitionSink abstractions
pub mod traits;
