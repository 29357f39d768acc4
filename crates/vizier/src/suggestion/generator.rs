//! Rule-based chart suggestions from column classifications.
//!
//! Four independent rules each look at which type buckets are populated and
//! propose one chart. Confidences are fixed per rule and only express a
//! static priority between them.

use crate::schema::{ColumnInfoMap, ColumnType};

use super::{ChartConfig, ChartType, Suggestion};

/// Synthetic x-axis meaning "plot against row position".
///
/// Used when a chart needs a horizontal axis but the dataset has no datetime
/// or categorical column to provide one.
pub const ROW_INDEX_AXIS: &str = "$index";

/// Upper bound on the number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 10;

pub const TIMESERIES_CONFIDENCE: f64 = 0.9;
pub const CATEGORY_COMPARISON_CONFIDENCE: f64 = 0.8;
pub const CORRELATION_CONFIDENCE: f64 = 0.7;
pub const MULTI_METRIC_CONFIDENCE: f64 = 0.6;

/// Column names split by classified type, each in table column order.
#[derive(Debug, Default)]
struct ColumnBuckets<'a> {
    numeric: Vec<&'a str>,
    categorical: Vec<&'a str>,
    datetime: Vec<&'a str>,
}

impl<'a> ColumnBuckets<'a> {
    fn from_info(column_info: &'a ColumnInfoMap) -> Self {
        let mut buckets = Self::default();
        for (name, info) in column_info {
            match info.column_type {
                ColumnType::Numeric => buckets.numeric.push(name),
                ColumnType::Categorical => buckets.categorical.push(name),
                ColumnType::Datetime => buckets.datetime.push(name),
            }
        }
        buckets
    }
}

/// Generates chart suggestions using rule-based logic.
pub struct SuggestionEngine;

impl SuggestionEngine {
    /// Generate suggestions for a classified dataset.
    ///
    /// The result is sorted by confidence, highest first. Rules with equal
    /// confidence keep their evaluation order.
    pub fn generate(column_info: &ColumnInfoMap) -> Vec<Suggestion> {
        let buckets = ColumnBuckets::from_info(column_info);

        let mut suggestions: Vec<Suggestion> = [
            Self::suggest_timeseries(&buckets),
            Self::suggest_category_comparison(&buckets),
            Self::suggest_correlation(&buckets),
            Self::suggest_multi_metric(&buckets),
        ]
        .into_iter()
        .flatten()
        .collect();

        for sug in &suggestions {
            tracing::debug!(id = %sug.id, confidence = sug.confidence, "suggestion rule fired");
        }

        // Vec::sort_by is stable
        suggestions.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        suggestions.truncate(MAX_SUGGESTIONS);

        suggestions
    }

    /// Plot the first metric over the first datetime column.
    fn suggest_timeseries(buckets: &ColumnBuckets) -> Option<Suggestion> {
        let time = *buckets.datetime.first()?;
        let metric = *buckets.numeric.first()?;

        let config = ChartConfig::new(ChartType::Line, time)
            .with_left_y_axes([metric])
            .with_grouping(buckets.categorical.iter().take(1).copied());

        Some(
            Suggestion::new(
                "timeseries",
                "Time Series Analysis",
                format!("Plot {} over time using {}", metric, time),
                config,
            )
            .with_confidence(TIMESERIES_CONFIDENCE),
        )
    }

    /// Compare the first metric across the first category.
    fn suggest_category_comparison(buckets: &ColumnBuckets) -> Option<Suggestion> {
        let category = *buckets.categorical.first()?;
        let metric = *buckets.numeric.first()?;

        let config = ChartConfig::new(ChartType::Box, category)
            .with_left_y_axes([metric])
            .with_grouping(buckets.categorical.iter().skip(1).take(1).copied());

        Some(
            Suggestion::new(
                "category_comparison",
                "Category Comparison",
                format!("Compare {} across {}", metric, category),
                config,
            )
            .with_confidence(CATEGORY_COMPARISON_CONFIDENCE),
        )
    }

    /// Scatter the first two metrics against each other.
    fn suggest_correlation(buckets: &ColumnBuckets) -> Option<Suggestion> {
        let [x, y, ..] = buckets.numeric.as_slice() else {
            return None;
        };

        let config = ChartConfig::new(ChartType::Scatter, *x)
            .with_left_y_axes([*y])
            .with_grouping(buckets.categorical.iter().take(1).copied());

        Some(
            Suggestion::new(
                "correlation",
                "Correlation Analysis",
                format!("Analyze relationship between {} and {}", x, y),
                config,
            )
            .with_confidence(CORRELATION_CONFIDENCE),
        )
    }

    /// Three metrics on dual value axes.
    fn suggest_multi_metric(buckets: &ColumnBuckets) -> Option<Suggestion> {
        let [first, second, third, ..] = buckets.numeric.as_slice() else {
            return None;
        };

        let shared_axis = buckets
            .datetime
            .first()
            .or_else(|| buckets.categorical.first())
            .copied();

        let (x_axis, against) = match shared_axis {
            Some(column) => (column, column),
            None => (ROW_INDEX_AXIS, "row order"),
        };

        let config = ChartConfig::new(ChartType::Line, x_axis)
            .with_left_y_axes([*first, *second])
            .with_right_y_axes([*third]);

        Some(
            Suggestion::new(
                "multi_metric",
                "Multi-Metric View",
                format!(
                    "Compare {} and {} with {} on a second axis, by {}",
                    first, second, third, against
                ),
                config,
            )
            .with_confidence(MULTI_METRIC_CONFIDENCE),
        )
    }
}
