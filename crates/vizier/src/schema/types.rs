//! Core type definitions for column classification.

use serde::{Deserialize, Serialize};

/// Semantic data type assigned to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Values are predominantly numbers.
    Numeric,
    /// Values are predominantly calendar dates or timestamps.
    Datetime,
    /// Everything else: labels, identifiers, free text.
    Categorical,
}

impl ColumnType {
    /// Wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Datetime => "datetime",
            ColumnType::Categorical => "categorical",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a column is recommended to be used in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnRole {
    /// Plot on a value axis.
    YAxis,
    /// Filter by numeric range.
    FilterRange,
    /// Plot along the horizontal axis.
    XAxis,
    /// Filter by date range.
    FilterDate,
    /// Split series by this column.
    Grouping,
    /// Filter by selecting categories.
    FilterCategory,
    /// Color marks by this column.
    ColorCoding,
}

impl ColumnRole {
    /// Wire name of the role tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::YAxis => "y-axis",
            ColumnRole::FilterRange => "filter-range",
            ColumnRole::XAxis => "x-axis",
            ColumnRole::FilterDate => "filter-date",
            ColumnRole::Grouping => "grouping",
            ColumnRole::FilterCategory => "filter-category",
            ColumnRole::ColorCoding => "color-coding",
        }
    }
}
