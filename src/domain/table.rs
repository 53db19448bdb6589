// ============================================================
// Layer 3 - Table Domain Type
// ============================================================
// The in-memory dataset that flows between pipeline stages.
//
// A Table is a header row plus a list of rows. Every cell is
// kept as the exact string read from the source so that a
// write/re-read cycle reproduces it cell for cell.
//
// Invariant: every row has exactly `columns.len()` cells.
// The constructors enforce it; stages that reshape a table
// build a new one rather than editing rows in place.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §8 (Vectors)

/// A named-column table of string cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names in source order
    columns: Vec<String>,

    /// Row-major cells, each row as long as `columns`
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from a header and rows.
    /// Returns the index of the first row whose width does not match.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, usize> {
        if let Some(bad) = rows.iter().position(|r| r.len() != columns.len()) {
            return Err(bad);
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (the header is not counted)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// A new table with the same header holding the rows at `indices`, in that order.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        Self {
            columns: self.columns.clone(),
            rows:    indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }

    /// Split the table back into its parts
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.columns, self.rows)
    }
}

// Builders for literal tables in tests
#[cfg(test)]
impl Table {
    /// Create an empty table with the given header.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows:    Vec::new(),
        }
    }

    /// Append one row; panics on a width mismatch.
    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        assert_eq!(
            row.len(),
            self.columns.len(),
            "row width {} does not match {} columns",
            row.len(),
            self.columns.len()
        );
        self.rows.push(row);
    }
}
