//! CSV/TSV reader built on the `csv` crate.
//!
//! The delimiter comes from the file extension unless one is configured.

use std::collections::HashSet;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Result, VizierError};
use super::source::{DataTable, SourceMetadata};

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = pick from the file extension).
    pub delimiter: Option<u8>,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Parses tabular data files.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let contents = std::fs::read(path).map_err(|e| VizierError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.parse_upload(path, &contents)
    }

    /// Parse in-memory contents of a file named `path`.
    ///
    /// The name is only used to pick the delimiter and fill in metadata.
    pub fn parse_upload(
        &self,
        path: impl AsRef<Path>,
        contents: &[u8],
    ) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => delimiter_for_path(path)?,
        };

        let mut hasher = Sha256::new();
        hasher.update(contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let table = self.parse_bytes(contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format,
            table.row_count(),
            table.column_count(),
        );

        tracing::debug!(
            file = %metadata.file,
            rows = metadata.row_count,
            columns = metadata.column_count,
            "parsed table"
        );

        Ok((table, metadata))
    }

    /// Parse bytes directly.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let raw_headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|s| s.trim().to_string())
            .collect();

        if raw_headers.is_empty() || raw_headers.iter().all(|h| h.is_empty()) {
            return Err(VizierError::EmptyData("No columns found".to_string()));
        }

        let headers = dedupe_headers(raw_headers);
        let expected_cols = headers.len();
        let mut rows = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            let mut row: Vec<Option<String>> = record.iter().map(DataTable::cell).collect();

            // Ragged rows are padded with nulls or cut back to the header width
            row.resize(expected_cols, None);
            rows.push(row);
        }

        Ok(DataTable::new(headers, rows, delimiter))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the delimiter for a file from its extension.
pub fn delimiter_for_path(path: &Path) -> Result<u8> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => Ok(b','),
        "tsv" | "tab" => Ok(b'\t'),
        _ => Err(VizierError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Make header names unique by suffixing repeats with `.1`, `.2`, ...
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    headers
        .into_iter()
        .map(|name| {
            let mut candidate = name.clone();
            let mut counter = 1;
            while !seen.insert(candidate.clone()) {
                candidate = format!("{}.{}", name, counter);
                counter += 1;
            }
            candidate
        })
        .collect()
}
