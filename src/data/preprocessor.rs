// ============================================================
// Layer 4 - Column Preprocessor
// ============================================================
// Reshapes the raw table into the canonical two-column schema.
//
// Steps (applied in order):
//   1. Drop every column in `SchemaMapping::drop`
//   2. Rename every `from` column in `SchemaMapping::rename`
//   3. Check that only the canonical columns remain
//
// A missing drop or rename column, or a leftover column that the
// mapping does not account for, is an IngestError::Schema. Rows
// keep their count and order; only cells are removed.
//
// No rows are removed here: nulls and duplicates pass through.
//
// Reference: Rust Book §8 (Vectors)
//            Rust Book §13 (Iterators)

use crate::domain::error::{IngestError, IngestResult};
use crate::domain::params::SchemaMapping;
use crate::domain::table::Table;
use crate::infra::logging::LogErr;

pub struct Preprocessor {
    schema: SchemaMapping,
}

impl Preprocessor {
    /// Create a Preprocessor for the given column mapping
    pub fn new(schema: SchemaMapping) -> Self {
        Self { schema }
    }

    /// Drop, rename, then verify the shape. Consumes the input table.
    pub fn preprocess(&self, table: Table) -> IngestResult<Table> {
        let cleaned = self
            .reshape(table)
            .log_err(|| "Error preprocessing data")?;

        tracing::debug!("Columns renamed successfully");
        tracing::info!(
            "Preprocessed {} rows into columns [{}]",
            cleaned.len(),
            cleaned.columns().join(", ")
        );
        Ok(cleaned)
    }

    fn reshape(&self, table: Table) -> IngestResult<Table> {
        let width = table.columns().len();

        // ── Step 1: Resolve dropped columns ──────────────────────────────────
        let mut dropped = vec![false; width];
        for name in &self.schema.drop {
            let idx = table
                .column_index(name)
                .ok_or_else(|| IngestError::schema(name, "column to drop not found"))?;
            dropped[idx] = true;
        }

        // ── Step 2: Rename surviving columns ─────────────────────────────────
        let mut renamed: Vec<Option<String>> = vec![None; width];
        for rule in &self.schema.rename {
            let idx = table
                .column_index(&rule.from)
                .filter(|&i| !dropped[i])
                .ok_or_else(|| IngestError::schema(&rule.from, "column to rename not found"))?;
            renamed[idx] = Some(rule.to.clone());
        }

        let (columns, rows) = table.into_parts();

        // ── Step 3: Everything left must be canonical ────────────────────────
        if let Some(extra) = (0..columns.len()).find(|&i| !dropped[i] && renamed[i].is_none()) {
            return Err(IngestError::schema(
                &columns[extra],
                "unexpected column left after cleaning",
            ));
        }

        let keep: Vec<usize> = (0..columns.len()).filter(|&i| !dropped[i]).collect();
        let new_columns: Vec<String> = keep
            .iter()
            .filter_map(|&i| renamed[i].clone())
            .collect();
        let new_rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .enumerate()
                    .filter(|(i, _)| !dropped[*i])
                    .map(|(_, cell)| cell)
                    .collect()
            })
            .collect();

        Table::from_rows(new_columns, new_rows)
            .map_err(|i| IngestError::schema("<row>", format!("row {i} lost its shape")))
    }
}
