//! Chart suggestion types.

use serde::{Deserialize, Serialize};

/// Kind of chart to draw.
///
/// This is the full chart vocabulary of [`ChartConfig`]. The built-in rules
/// and templates only emit `Line`, `Box` and `Scatter`; `Bar` and `Violin`
/// exist for configs built or edited by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Box,
    Scatter,
    Bar,
    Violin,
}

impl ChartType {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Line => "Line",
            ChartType::Box => "Box",
            ChartType::Scatter => "Scatter",
            ChartType::Bar => "Bar",
            ChartType::Violin => "Violin",
        }
    }
}

/// A ready-to-apply chart configuration.
///
/// Axis and grouping entries are column names. `right_y_axes` and `grouping`
/// are always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub chart_type: ChartType,
    pub x_axis: String,
    pub left_y_axes: Vec<String>,
    pub right_y_axes: Vec<String>,
    pub grouping: Vec<String>,
}

impl ChartConfig {
    /// Create a config with empty value axes and no grouping.
    pub fn new(chart_type: ChartType, x_axis: impl Into<String>) -> Self {
        Self {
            chart_type,
            x_axis: x_axis.into(),
            left_y_axes: Vec::new(),
            right_y_axes: Vec::new(),
            grouping: Vec::new(),
        }
    }

    /// Set the columns plotted on the left value axis.
    pub fn with_left_y_axes<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.left_y_axes = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the columns plotted on the right value axis.
    pub fn with_right_y_axes<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.right_y_axes = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the grouping columns.
    pub fn with_grouping<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grouping = columns.into_iter().map(Into::into).collect();
        self
    }
}

/// A proposed chart for a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Rule identifier (e.g. `timeseries`).
    pub id: String,

    /// Short display title.
    pub title: String,

    /// Human-readable description naming the selected columns.
    pub description: String,

    /// The chart to draw.
    pub config: ChartConfig,

    /// Static rule priority (0.0-1.0), higher first.
    pub confidence: f64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        config: ChartConfig,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            config,
            confidence: 0.0,
        }
    }

    /// Set confidence, clamped to [0, 1].
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }
}
