//! Templates command - list built-in visualization templates.

use colored::Colorize;
use vizier::builtin_templates;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let templates = builtin_templates();
    tracing::debug!(count = templates.len(), "listing templates");

    if json {
        println!("{}", serde_json::to_string_pretty(&templates)?);
        return Ok(());
    }

    for template in &templates {
        println!(
            "{} {} [{}]",
            template.id.cyan().bold(),
            template.name.white(),
            template.category.dimmed()
        );
        println!(
            "  {} chart, theme '{}'",
            template.config.chart_type.label(),
            template.config.customizations.theme
        );
        println!("  {}", template.description);
    }

    Ok(())
}
