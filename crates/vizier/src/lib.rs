//! Vizier: column classification and chart suggestions for tabular datasets.
//!
//! Vizier reads a CSV or TSV file, decides for each column whether it holds
//! numbers, timestamps or categories, and proposes ready-to-apply chart
//! configurations for the dataset.
//!
//! # Core Principles
//!
//! - **Sample-based**: Types are inferred from the first non-null values
//! - **Deterministic**: Same input, same classifications and suggestions
//! - **Total**: Classification never fails, whatever the cell contents
//!
//! # Example
//!
//! ```no_run
//! use vizier::Vizier;
//!
//! let vizier = Vizier::new();
//! let analysis = vizier.analyze("sales.csv").unwrap();
//!
//! for (name, info) in &analysis.column_info {
//!     println!("{}: {}", name, info.column_type);
//! }
//! for suggestion in &analysis.suggestions {
//!     println!("{} ({:.1})", suggestion.title, suggestion.confidence);
//! }
//! ```

pub mod error;
pub mod inference;
pub mod input;
pub mod schema;
pub mod statistics;
pub mod suggestion;
pub mod templates;

mod vizier;

pub use crate::vizier::{DatasetAnalysis, PreviewRow, Vizier, VizierConfig};
pub use error::{Result, VizierError};
pub use inference::ColumnClassifier;
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use schema::{ColumnInfo, ColumnInfoMap, ColumnRole, ColumnType};
pub use statistics::{compute_statistics, ColumnStatistics};
pub use suggestion::{ChartConfig, ChartType, Suggestion, SuggestionEngine};
pub use templates::{builtin_templates, Template};
