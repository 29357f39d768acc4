//! Data source abstraction and metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tokens read as missing values, compared after trimming.
const NULL_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None",
    "#N/A", "#N/A N/A", "#NA", "<NA>", "1.#IND", "-1.#IND", "1.#QNAN", "-1.#QNAN",
];

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the analysis was performed.
    pub analyzed_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been read.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            analyzed_at: Utc::now(),
        }
    }

    /// Short identifier derived from the content hash.
    pub fn dataset_id(&self) -> String {
        let digest = self.hash.strip_prefix("sha256:").unwrap_or(&self.hash);
        digest.chars().take(16).collect()
    }
}

/// A rectangular table of named columns.
///
/// Cells are stored row-major; `None` marks a missing value.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column headers, in file order.
    pub headers: Vec<String>,
    /// Row data; every row has exactly `headers.len()` cells.
    pub rows: Vec<Vec<Option<String>>>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>, delimiter: u8) -> Self {
        Self {
            headers,
            rows,
            delimiter,
        }
    }

    /// Build a table from raw string cells, mapping null tokens to `None`.
    pub fn from_raw<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|row| {
                let mut cells: Vec<Option<String>> =
                    row.into_iter().map(|cell| Self::cell(cell.as_ref())).collect();
                cells.resize(width, None);
                cells
            })
            .collect();

        Self::new(headers, rows, b',')
    }

    /// Convert a raw cell into a stored value.
    pub(crate) fn cell(raw: &str) -> Option<String> {
        if Self::is_null_value(raw) {
            None
        } else {
            Some(raw.to_string())
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = Option<&str>> {
        self.rows
            .iter()
            .map(move |row| row.get(index).and_then(|cell| cell.as_deref()))
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let index = self.column_index(name)?;
        Some(self.column_values(index).collect())
    }

    /// Get a specific cell value. Missing cells and nulls both return `None`.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|cell| cell.as_deref())
    }

    /// Check if a raw value represents a missing/null value.
    pub fn is_null_value(value: &str) -> bool {
        NULL_TOKENS.contains(&value.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_null_value() {
        assert!(DataTable::is_null_value(""));
        assert!(DataTable::is_null_value("  "));
        assert!(DataTable::is_null_value("NA"));
        assert!(DataTable::is_null_value("N/A"));
        assert!(DataTable::is_null_value("null"));
        assert!(DataTable::is_null_value("NULL"));
        assert!(DataTable::is_null_value("NaN"));
        assert!(DataTable::is_null_value("#N/A"));
        assert!(!DataTable::is_null_value("value"));
        assert!(!DataTable::is_null_value("0"));
        assert!(!DataTable::is_null_value("."));
    }

    #[test]
    fn test_from_raw_pads_and_maps_nulls() {
        let table = DataTable::from_raw(["a", "b", "c"], vec![vec!["1", "NA"], vec!["2", "x", "y"]]);

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("1"));
        assert_eq!(table.get(0, 1), None);
        assert_eq!(table.get(0, 2), None);
        assert_eq!(table.get(1, 2), Some("y"));
    }

    #[test]
    fn test_column_by_name() {
        let table = DataTable::from_raw(["x", "y"], vec![vec!["1", "a"], vec!["", "b"]]);

        assert_eq!(table.column_by_name("x"), Some(vec![Some("1"), None]));
        assert_eq!(table.column_by_name("missing"), None);
    }

    #[test]
    fn test_dataset_id_from_hash() {
        let meta = SourceMetadata::new(
            PathBuf::from("/tmp/sales.csv"),
            "sha256:0123456789abcdef0123".to_string(),
            10,
            "csv".to_string(),
            1,
            1,
        );

        assert_eq!(meta.file, "sales.csv");
        assert_eq!(meta.dataset_id(), "0123456789abcdef");
    }
}
