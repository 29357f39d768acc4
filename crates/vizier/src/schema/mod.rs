//! Schema types describing classified columns.

mod column;
mod types;

pub use column::{ColumnInfo, ColumnInfoMap};
pub use types::{ColumnRole, ColumnType};
