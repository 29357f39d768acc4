//! Main Vizier struct and public API.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VizierError};
use crate::inference::ColumnClassifier;
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::schema::ColumnInfoMap;
use crate::statistics::{compute_statistics, ColumnStatistics};
use crate::suggestion::{Suggestion, SuggestionEngine};

/// Configuration for Vizier analysis.
#[derive(Debug, Clone)]
pub struct VizierConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Number of leading rows echoed back in the analysis.
    pub preview_rows: usize,
}

impl Default for VizierConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            preview_rows: 10,
        }
    }
}

/// One preview row, keyed by column name in column order.
pub type PreviewRow = IndexMap<String, Option<String>>;

/// Result of analyzing a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetAnalysis {
    /// Short content-derived identifier.
    pub id: String,
    /// File name without path.
    pub filename: String,
    /// Column names in file order.
    pub columns: Vec<String>,
    /// Number of data rows.
    pub row_count: usize,
    /// Classification for every column, in column order.
    pub column_info: ColumnInfoMap,
    /// Chart suggestions, highest confidence first.
    pub suggestions: Vec<Suggestion>,
    /// Leading rows of the table.
    pub preview: Vec<PreviewRow>,
    /// Metadata about the source file.
    pub source: SourceMetadata,
}

impl DatasetAnalysis {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the analysis as JSON to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;

        std::fs::write(path, json).map_err(|e| VizierError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::info!(path = %path.display(), "saved analysis");
        Ok(())
    }
}

/// The main Vizier analysis engine.
pub struct Vizier {
    config: VizierConfig,
    parser: Parser,
    classifier: ColumnClassifier,
}

impl Vizier {
    /// Create a new Vizier instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(VizierConfig::default())
    }

    /// Create a Vizier instance with custom configuration.
    pub fn with_config(config: VizierConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());

        Self {
            config,
            parser,
            classifier: ColumnClassifier::new(),
        }
    }

    /// Analyze a data file on disk.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<DatasetAnalysis> {
        let (table, source) = self.parser.parse_file(path)?;
        Ok(self.analyze_table(&table, source))
    }

    /// Analyze uploaded file contents.
    ///
    /// `filename` picks the delimiter and is reported back.
    pub fn analyze_bytes(&self, filename: &str, contents: &[u8]) -> Result<DatasetAnalysis> {
        let (table, source) = self.parser.parse_upload(filename, contents)?;
        Ok(self.analyze_table(&table, source))
    }

    /// Classify and suggest charts for an already parsed table.
    pub fn analyze_table(&self, table: &DataTable, source: SourceMetadata) -> DatasetAnalysis {
        let column_info = self.classifier.classify_table(table);
        let suggestions = SuggestionEngine::generate(&column_info);

        tracing::info!(
            file = %source.file,
            rows = table.row_count(),
            columns = table.column_count(),
            suggestions = suggestions.len(),
            "analyzed dataset"
        );

        DatasetAnalysis {
            id: source.dataset_id(),
            filename: source.file.clone(),
            columns: table.headers.clone(),
            row_count: table.row_count(),
            column_info,
            suggestions,
            preview: self.preview(table),
            source,
        }
    }

    /// Summary statistics for the named columns of a file.
    pub fn statistics<S: AsRef<str>>(
        &self,
        path: impl AsRef<Path>,
        columns: &[S],
    ) -> Result<IndexMap<String, ColumnStatistics>> {
        let (table, _) = self.parser.parse_file(path)?;
        Ok(compute_statistics(&table, columns))
    }

    fn preview(&self, table: &DataTable) -> Vec<PreviewRow> {
        table
            .rows
            .iter()
            .take(self.config.preview_rows)
            .map(|row| {
                table
                    .headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }
}

impl Default for Vizier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_analyze_file() {
        let file = write_csv("date,sales,store\n2024-01-01,10,A\n2024-01-02,12,B\n2024-01-03,9,A\n");
        let analysis = Vizier::new().analyze(file.path()).unwrap();

        assert_eq!(analysis.columns, vec!["date", "sales", "store"]);
        assert_eq!(analysis.row_count, 3);
        assert_eq!(analysis.column_info["date"].column_type, ColumnType::Datetime);
        assert_eq!(analysis.column_info["sales"].column_type, ColumnType::Numeric);
        assert_eq!(analysis.suggestions[0].id, "timeseries");
        assert_eq!(analysis.id.len(), 16);
    }

    #[test]
    fn test_preview_is_limited() {
        let rows: String = (0..30).map(|i| format!("{i},x\n")).collect();
        let analysis = Vizier::new()
            .analyze_bytes("data.csv", format!("n,label\n{rows}").as_bytes())
            .unwrap();

        assert_eq!(analysis.preview.len(), 10);
        assert_eq!(analysis.preview[3]["n"].as_deref(), Some("3"));

        let vizier = Vizier::with_config(VizierConfig {
            preview_rows: 2,
            ..Default::default()
        });
        let analysis = vizier
            .analyze_bytes("data.csv", format!("n,label\n{rows}").as_bytes())
            .unwrap();
        assert_eq!(analysis.preview.len(), 2);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Vizier::new().analyze_bytes("data.xlsx", b"a,b\n1,2\n").unwrap_err();
        assert!(matches!(err, VizierError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Vizier::new().analyze("/nonexistent/data.csv").unwrap_err();
        assert!(matches!(err, VizierError::Io { .. }));
    }

    #[test]
    fn test_save_and_wire_format() {
        let analysis = Vizier::new()
            .analyze_bytes("data.csv", b"x,y\n1,2\n3,4\n")
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("analysis.json");
        analysis.save(&out).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["filename"], "data.csv");
        assert_eq!(json["rowCount"], 2);
        assert_eq!(json["columnInfo"]["x"]["type"], "numeric");
        assert_eq!(json["suggestions"][0]["id"], "correlation");
    }

    #[test]
    fn test_statistics() {
        let file = write_csv("v,g\n1,a\n2,b\n3,a\n");
        let stats = Vizier::new().statistics(file.path(), &["v", "g"]).unwrap();

        assert!(matches!(stats["v"], ColumnStatistics::Numeric(_)));
        assert!(matches!(stats["g"], ColumnStatistics::Categorical(_)));
    }
}
