// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Coordinates the other layers to run the ingestion pipeline.
// No parsing, cleaning or file writing happens here directly;
// this layer only decides the order and wires the stages up.
//
// Reference: Rust Book §7 (Module System)

// The load → clean → split → save workflow
pub mod ingest_use_case;
