// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// The three data-handling stages, in the order they run:
//
//   CSV source (HTTP or local)
//       │
//       ▼
//   loader        → parses the CSV into a Table
//       │
//       ▼
//   preprocessor  → drops junk columns, renames to target/text
//       │
//       ▼
//   splitter      → seeded shuffle into train / test
//
// Persisting the partitions is Layer 6 (infra::partition_store).
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Fetches and parses CSV sources
pub mod loader;

/// Column drop / rename into the canonical schema
pub mod preprocessor;

/// Seeded train/test split
pub mod splitter;
