//! Input parsing and data source handling.

mod parser;
mod source;

pub use parser::{delimiter_for_path, Parser, ParserConfig};
pub use source::{DataTable, SourceMetadata};
