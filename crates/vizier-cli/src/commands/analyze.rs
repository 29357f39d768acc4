//! Analyze command - classify columns and suggest charts for a data file.

use std::path::PathBuf;

use colored::Colorize;
use vizier::{ColumnType, Vizier, VizierConfig};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    json: bool,
    preview_rows: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    tracing::debug!(file = %file.display(), preview_rows, "running analyze");

    let vizier = Vizier::with_config(VizierConfig {
        preview_rows,
        ..Default::default()
    });
    let analysis = vizier.analyze(&file)?;

    if let Some(ref path) = output {
        analysis.save(path)?;
        tracing::debug!(id = %analysis.id, path = %path.display(), "wrote analysis");
    }

    if json {
        println!("{}", analysis.to_json()?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows, {} columns)",
        "Analyzed".cyan().bold(),
        analysis.filename.white(),
        analysis.row_count,
        analysis.columns.len()
    );

    println!();
    println!("{}", "Columns:".yellow().bold());
    for (name, info) in &analysis.column_info {
        let type_label = match info.column_type {
            ColumnType::Numeric => info.column_type.as_str().green(),
            ColumnType::Datetime => info.column_type.as_str().blue(),
            ColumnType::Categorical => info.column_type.as_str().magenta(),
        };
        let roles: Vec<&str> = info.suggestions.iter().map(|r| r.as_str()).collect();

        println!("  {:20} {:12} {}", name, type_label, roles.join(", ").dimmed());

        if verbose {
            println!(
                "  {:20} unique={} nulls={} sample=[{}]",
                "",
                info.unique_count,
                info.null_count,
                info.sample_values.join(", ")
            );
        }
    }

    println!();
    if analysis.suggestions.is_empty() {
        println!("{}", "No chart suggestions for this dataset".yellow());
    } else {
        println!("{}", "Suggestions:".yellow().bold());
        for (i, sug) in analysis.suggestions.iter().enumerate() {
            println!(
                "  {}. {} [{}] {:.0}%",
                i + 1,
                sug.title.white().bold(),
                sug.config.chart_type.label(),
                sug.confidence * 100.0
            );
            println!("     {}", sug.description);
        }
    }

    if let Some(path) = output {
        println!();
        println!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }

    Ok(())
}
