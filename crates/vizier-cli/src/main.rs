//! Vizier CLI - column classification and chart suggestions.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Analyze {
            file,
            output,
            json,
            preview_rows,
        } => commands::analyze::run(file, output, json, preview_rows, cli.verbose),

        Commands::Stats {
            file,
            columns,
            json,
        } => commands::stats::run(file, columns, json),

        Commands::Templates { json } => commands::templates::run(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
