//! Column type classification from a bounded value sample.
//!
//! # Classification policy
//!
//! Each column is judged on its first [`SAMPLE_SIZE`] non-null values, in row
//! order. The decision is taken in strict priority:
//!
//! 1. more than 80% of the sample coerces to a number → numeric
//! 2. more than 80% parses as a date/time → datetime
//! 3. otherwise categorical, with grouping roles only when fewer than 10% of
//!    sampled values are distinct
//!
//! Numeric wins over datetime so that serial numbers and bare years are never
//! read as dates. The thresholds are fixed constants.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::input::DataTable;
use crate::schema::{ColumnInfo, ColumnRole, ColumnType};

use super::probe::{try_parse_datetime, try_parse_number};

/// Maximum non-null values inspected per column.
pub const SAMPLE_SIZE: usize = 100;

/// Maximum sampled values echoed back in [`ColumnInfo::sample_values`].
pub const PREVIEW_VALUES: usize = 5;

/// Share of numeric values above which a column is numeric.
pub const NUMERIC_THRESHOLD: f64 = 0.8;

/// Share of date/time values above which a column is datetime.
pub const DATETIME_THRESHOLD: f64 = 0.8;

/// Distinct-value share below which a categorical column suits grouping.
pub const GROUPING_CARDINALITY: f64 = 0.1;

/// Assigns a [`ColumnType`] and role tags to every column of a table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnClassifier;

impl ColumnClassifier {
    /// Create a classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify every column, keyed by name in table column order.
    ///
    /// Header names are expected to be unique; a repeated name keeps the
    /// position of its first occurrence and the result of its last.
    pub fn classify_table(&self, table: &DataTable) -> IndexMap<String, ColumnInfo> {
        table
            .headers
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let info = self.classify_column(table.column_values(index));
                tracing::debug!(
                    column = %name,
                    column_type = %info.column_type,
                    unique = info.unique_count,
                    nulls = info.null_count,
                    "classified column"
                );
                (name.clone(), info)
            })
            .collect()
    }

    /// Classify one column from its full value sequence (`None` = null).
    pub fn classify_column<'a, I>(&self, values: I) -> ColumnInfo
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut null_count = 0;
        let mut sample: Vec<&str> = Vec::with_capacity(SAMPLE_SIZE);

        // Nulls are counted over the whole column, the sample stops at SAMPLE_SIZE
        for value in values {
            match value {
                None => null_count += 1,
                Some(v) if sample.len() < SAMPLE_SIZE => sample.push(v),
                Some(_) => {}
            }
        }

        let unique_count = sample.iter().collect::<HashSet<_>>().len();
        let (column_type, suggestions) = Self::classify_sample(&sample, unique_count);

        ColumnInfo {
            column_type,
            suggestions,
            unique_count,
            null_count,
            sample_values: sample
                .iter()
                .take(PREVIEW_VALUES)
                .map(|v| v.to_string())
                .collect(),
        }
    }

    /// Apply the classification policy to a sample.
    fn classify_sample(sample: &[&str], unique_count: usize) -> (ColumnType, Vec<ColumnRole>) {
        if sample.is_empty() {
            return (ColumnType::Categorical, Vec::new());
        }

        let total = sample.len() as f64;

        let numeric_count = sample
            .iter()
            .filter(|v| try_parse_number(v).is_some())
            .count();
        if numeric_count as f64 / total > NUMERIC_THRESHOLD {
            return (
                ColumnType::Numeric,
                vec![ColumnRole::YAxis, ColumnRole::FilterRange],
            );
        }

        let datetime_count = sample
            .iter()
            .filter(|v| try_parse_datetime(v).is_some())
            .count();
        if datetime_count as f64 / total > DATETIME_THRESHOLD {
            return (
                ColumnType::Datetime,
                vec![ColumnRole::XAxis, ColumnRole::FilterDate],
            );
        }

        let unique_ratio = unique_count as f64 / total;
        let suggestions = if unique_ratio < GROUPING_CARDINALITY {
            vec![
                ColumnRole::Grouping,
                ColumnRole::FilterCategory,
                ColumnRole::ColorCoding,
            ]
        } else {
            vec![ColumnRole::XAxis, ColumnRole::FilterCategory]
        };

        (ColumnType::Categorical, suggestions)
    }
}
