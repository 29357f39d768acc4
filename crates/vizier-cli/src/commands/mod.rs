//! CLI command implementations.

pub mod analyze;
pub mod stats;
pub mod templates;
