//! Descriptive statistics for selected columns.
//!
//! Unlike classification, statistics cover the full column rather than a
//! sample.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::inference::try_parse_number;
use crate::input::DataTable;

/// Number of most frequent values reported for non-numeric columns.
pub const TOP_VALUES: usize = 10;

/// Summary statistics for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnStatistics {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

/// Statistics for columns whose values are all numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    /// Non-null values.
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Sample standard deviation (n - 1 denominator).
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// 25th, 50th and 75th percentiles.
    pub quartiles: Vec<f64>,
}

/// Statistics for every other column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    /// Non-null values.
    pub count: usize,
    /// Distinct non-null values.
    pub unique: usize,
    /// Most frequent values with their counts.
    pub top_values: IndexMap<String, usize>,
}

// =============================================================================
// STREAMING STATISTICS
// =============================================================================

/// Single-pass mean and variance using Welford's algorithm.
#[derive(Debug, Clone)]
struct StreamingStats {
    count: usize,
    mean: f64,
    m2: f64, // Sum of squared differences from mean
    min: f64,
    max: f64,
}

impl StreamingStats {
    fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn add(&mut self, value: f64) {
        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Sample standard deviation, undefined below two values.
    fn sample_std(&self) -> Option<f64> {
        if self.count < 2 {
            None
        } else {
            Some((self.m2 / (self.count - 1) as f64).sqrt())
        }
    }
}

/// Percentile of sorted values, interpolating linearly between closest ranks.
fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let rank = p * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

fn numeric_summary(values: &[f64]) -> NumericSummary {
    let mut stats = StreamingStats::new();
    for &value in values {
        stats.add(value);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let has_values = stats.count > 0;
    let quartiles: Vec<f64> = [0.25, 0.5, 0.75]
        .iter()
        .filter_map(|&p| percentile(&sorted, p))
        .collect();

    NumericSummary {
        count: stats.count,
        mean: has_values.then_some(stats.mean),
        median: percentile(&sorted, 0.5),
        std: stats.sample_std(),
        min: has_values.then_some(stats.min),
        max: has_values.then_some(stats.max),
        quartiles,
    }
}

fn categorical_summary(values: &[&str]) -> CategoricalSummary {
    let mut value_counts: IndexMap<&str, usize> = IndexMap::new();
    for &value in values {
        *value_counts.entry(value).or_insert(0) += 1;
    }

    let unique = value_counts.len();

    // Stable sort keeps first-seen order among equal counts
    value_counts.sort_by(|_, a, _, b| b.cmp(a));
    let top_values = value_counts
        .into_iter()
        .take(TOP_VALUES)
        .map(|(value, count)| (value.to_string(), count))
        .collect();

    CategoricalSummary {
        count: values.len(),
        unique,
        top_values,
    }
}

/// Summarise one column by index.
///
/// A column is numeric when it has at least one value and every non-null
/// value coerces to a number.
pub fn column_statistics(table: &DataTable, index: usize) -> ColumnStatistics {
    let values: Vec<&str> = table.column_values(index).flatten().collect();

    let numbers: Option<Vec<f64>> = values.iter().map(|v| try_parse_number(v)).collect();

    match numbers {
        Some(numbers) if !numbers.is_empty() => ColumnStatistics::Numeric(numeric_summary(&numbers)),
        _ => ColumnStatistics::Categorical(categorical_summary(&values)),
    }
}

/// Summarise the requested columns, in request order.
///
/// Names that are not in the table are skipped.
pub fn compute_statistics<S: AsRef<str>>(
    table: &DataTable,
    columns: &[S],
) -> IndexMap<String, ColumnStatistics> {
    columns
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            match table.column_index(name) {
                Some(index) => Some((name.to_string(), column_statistics(table, index))),
                None => {
                    tracing::debug!(column = %name, "statistics requested for unknown column");
                    None
                }
            }
        })
        .collect()
}
