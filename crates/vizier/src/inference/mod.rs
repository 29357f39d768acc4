//! Column type inference.

mod classifier;
mod probe;

pub use classifier::{
    ColumnClassifier, DATETIME_THRESHOLD, GROUPING_CARDINALITY, NUMERIC_THRESHOLD,
    PREVIEW_VALUES, SAMPLE_SIZE,
};
pub use probe::{try_parse_datetime, try_parse_number};
