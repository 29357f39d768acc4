//! Chart suggestions derived from column classifications.
//!
//! This module defines ready-to-apply chart configurations and the rule
//! engine that proposes them.

mod generator;
mod suggestion;

pub use generator::{
    SuggestionEngine, CATEGORY_COMPARISON_CONFIDENCE, CORRELATION_CONFIDENCE, MAX_SUGGESTIONS,
    MULTI_METRIC_CONFIDENCE, ROW_INDEX_AXIS, TIMESERIES_CONFIDENCE,
};
pub use suggestion::{ChartConfig, ChartType, Suggestion};
