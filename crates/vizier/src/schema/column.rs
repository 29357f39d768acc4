//! Per-column classification result.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::{ColumnRole, ColumnType};

/// Classification of a single column.
///
/// `unique_count` and `sample_values` describe the inference sample only;
/// `null_count` covers the whole column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Inferred data type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Recommended uses, in policy order.
    pub suggestions: Vec<ColumnRole>,
    /// Distinct values within the sample.
    pub unique_count: usize,
    /// Missing values across the full column.
    pub null_count: usize,
    /// First few sampled values, verbatim.
    pub sample_values: Vec<String>,
}

impl ColumnInfo {
    /// Create column info with no statistics filled in.
    pub fn new(column_type: ColumnType, suggestions: Vec<ColumnRole>) -> Self {
        Self {
            column_type,
            suggestions,
            unique_count: 0,
            null_count: 0,
            sample_values: Vec::new(),
        }
    }

    /// Whether a role tag was recommended for this column.
    pub fn has_role(&self, role: ColumnRole) -> bool {
        self.suggestions.contains(&role)
    }
}

/// Column name to classification, in table column order.
pub type ColumnInfoMap = IndexMap<String, ColumnInfo>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let mut info = ColumnInfo::new(
            ColumnType::Numeric,
            vec![ColumnRole::YAxis, ColumnRole::FilterRange],
        );
        info.unique_count = 3;
        info.null_count = 1;
        info.sample_values = vec!["1".into(), "2".into()];

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "numeric");
        assert_eq!(json["suggestions"][0], "y-axis");
        assert_eq!(json["suggestions"][1], "filter-range");
        assert_eq!(json["unique_count"], 3);
        assert_eq!(json["null_count"], 1);
        assert_eq!(json["sample_values"][1], "2");
        assert!(info.has_role(ColumnRole::YAxis));
        assert!(!info.has_role(ColumnRole::Grouping));
    }
}
