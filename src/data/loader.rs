// ============================================================
// Layer 4 - Dataset Loader
// ============================================================
// Fetches a comma-delimited table from a URI:
//
//   http://… / https://…  → blocking GET with a request timeout
//   file://…              → local path after the scheme
//   anything else         → local filesystem path
//
// Parsing rules:
//   - the first row is the header; a source with no header row
//     is rejected as non-tabular
//   - blank header cells are named "Unnamed: <index>"
//   - rows shorter than the header are padded with empty cells,
//     rows longer than the header are a parse error
//   - content must be valid UTF-8
//
// Every failure becomes IngestError::Acquisition carrying the URI.
// Nothing is retried.
//
// Reference: csv crate documentation
//            reqwest::blocking documentation

use std::{fs, path::PathBuf, time::Duration};

use crate::domain::error::{IngestError, IngestResult};
use crate::domain::table::Table;
use crate::domain::traits::DatasetSource;
use crate::infra::logging::LogErr;

/// Where a CSV source lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Http(String),
    Local(PathBuf),
}

impl Location {
    /// Classify a URI string.
    pub fn parse(uri: &str) -> Self {
        let lower = uri.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Location::Http(uri.to_string())
        } else if lower.starts_with("file://") {
            Location::Local(PathBuf::from(&uri["file://".len()..]))
        } else {
            Location::Local(PathBuf::from(uri))
        }
    }
}

/// A CSV dataset reachable over HTTP or on disk.
/// Implements the DatasetSource trait from Layer 3.
pub struct CsvSource {
    uri:      String,
    location: Location,
    /// Upper bound for the whole HTTP request
    timeout:  Duration,
}

impl CsvSource {
    pub fn new(uri: impl Into<String>, timeout: Duration) -> Self {
        let uri = uri.into();
        Self { location: Location::parse(&uri), uri, timeout }
    }

    fn fetch_bytes(&self) -> IngestResult<Vec<u8>> {
        let err = |e: &dyn std::fmt::Display| IngestError::acquisition(&self.uri, e);

        match &self.location {
            Location::Local(path) => fs::read(path).map_err(|e| err(&e)),
            Location::Http(url) => {
                let client = reqwest::blocking::Client::builder()
                    .timeout(self.timeout)
                    .build()
                    .map_err(|e| err(&e))?;

                let response = client
                    .get(url)
                    .send()
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| err(&e))?;

                let body = response.bytes().map_err(|e| err(&e))?;
                Ok(body.to_vec())
            }
        }
    }
}

impl DatasetSource for CsvSource {
    fn describe(&self) -> String {
        self.uri.clone()
    }

    fn load(&self) -> IngestResult<Table> {
        let bytes = self.fetch_bytes()?;
        parse_csv(&bytes).map_err(|msg| IngestError::acquisition(&self.uri, msg))
    }
}

/// Load the table at `uri`, logging the outcome.
pub fn load_data(source: &dyn DatasetSource) -> IngestResult<Table> {
    let uri = source.describe();

    let table = source
        .load()
        .log_err(|| format!("Error loading data from {uri}"))?;

    if table.is_empty() {
        tracing::warn!("Source {} has a header but no data rows", uri);
    }
    tracing::info!(
        "Data loaded successfully from {} ({} rows, {} columns)",
        uri,
        table.len(),
        table.columns().len()
    );
    Ok(table)
}

/// Parse comma-delimited bytes into a Table.
/// Errors are returned as plain messages; the caller attaches the URI.
pub fn parse_csv(bytes: &[u8]) -> Result<Table, String> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let header = reader.headers().map_err(|e| e.to_string())?.clone();
    if header.is_empty() {
        return Err("no header row: content is not tabular".to_string());
    }

    let columns: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if name.trim().is_empty() {
                format!("Unnamed: {i}")
            } else {
                name.to_string()
            }
        })
        .collect();
    let width = columns.len();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;

        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(format!(
                "expected {width} fields, saw {} on line {line}",
                record.len()
            ));
        }

        let mut row: Vec<String> = record.iter().map(String::from).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    Table::from_rows(columns, rows).map_err(|i| format!("row {i} has the wrong width"))
}
