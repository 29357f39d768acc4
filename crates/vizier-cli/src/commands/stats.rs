//! Stats command - descriptive statistics for selected columns.

use std::path::PathBuf;

use colored::Colorize;
use vizier::{ColumnStatistics, Vizier};

fn fmt_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.4}", v))
}

pub fn run(
    file: PathBuf,
    columns: Vec<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    tracing::debug!(file = %file.display(), columns = ?columns, "running stats");

    let stats = Vizier::new().statistics(&file, columns.as_slice())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    for missing in columns.iter().filter(|c| !stats.contains_key(c.as_str())) {
        println!("{} unknown column '{}'", "Skipped".yellow().bold(), missing);
    }

    for (name, column) in &stats {
        println!();
        println!("{}", name.cyan().bold());

        match column {
            ColumnStatistics::Numeric(s) => {
                println!("  count   {}", s.count);
                println!("  mean    {}", fmt_value(s.mean));
                println!("  median  {}", fmt_value(s.median));
                println!("  std     {}", fmt_value(s.std));
                println!("  min     {}", fmt_value(s.min));
                println!("  max     {}", fmt_value(s.max));
                let quartiles: Vec<String> =
                    s.quartiles.iter().map(|q| format!("{:.4}", q)).collect();
                println!("  q1/q2/q3 {}", quartiles.join(" / "));
            }
            ColumnStatistics::Categorical(s) => {
                println!("  count   {}", s.count);
                println!("  unique  {}", s.unique);
                for (value, count) in &s.top_values {
                    println!("    {:20} {}", value, count);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_unknown_column_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.tsv");
        std::fs::write(&input, "v\tg\n1\ta\n2\tb\n").unwrap();

        run(input, vec!["v".to_string(), "missing".to_string()], false).unwrap();
    }
}
