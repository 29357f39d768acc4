//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vizier: column classification and chart suggestions for tabular data
#[derive(Parser)]
#[command(name = "vizier")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify columns and suggest charts for a data file
    Analyze {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the full analysis as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the analysis as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Number of rows included in the preview
        #[arg(long, default_value = "10")]
        preview_rows: usize,
    },

    /// Show descriptive statistics for selected columns
    Stats {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Columns to summarise
        #[arg(short, long, value_delimiter = ',', required = true)]
        columns: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in visualization templates
    Templates {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
