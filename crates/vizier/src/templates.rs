//! Predefined visualization templates.

use serde::{Deserialize, Serialize};

use crate::suggestion::ChartType;

/// Display customizations applied on top of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customizations {
    pub title: String,
    pub theme: String,
}

/// Chart settings carried by a template. Axes are left to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub chart_type: ChartType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_data_points: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_outliers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<bool>,
    pub customizations: Customizations,
}

impl TemplateConfig {
    fn new(chart_type: ChartType, title: &str, theme: &str) -> Self {
        Self {
            chart_type,
            show_data_points: None,
            show_outliers: None,
            annotations: None,
            customizations: Customizations {
                title: title.to_string(),
                theme: theme.to_string(),
            },
        }
    }
}

/// A named starting point for a visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub config: TemplateConfig,
}

impl Template {
    fn new(id: &str, name: &str, description: &str, category: &str, config: TemplateConfig) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            config,
        }
    }
}

/// The built-in template catalog.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new(
            "sales_dashboard",
            "Sales Dashboard",
            "Track sales metrics over time with multiple KPIs",
            "Business",
            TemplateConfig {
                show_data_points: Some(true),
                ..TemplateConfig::new(ChartType::Line, "Sales Performance Dashboard", "professional")
            },
        ),
        Template::new(
            "scientific_analysis",
            "Scientific Analysis",
            "Statistical analysis with error bars and regression",
            "Science",
            TemplateConfig {
                show_outliers: Some(true),
                annotations: Some(true),
                ..TemplateConfig::new(ChartType::Scatter, "Scientific Data Analysis", "minimal")
            },
        ),
        Template::new(
            "comparison_study",
            "Comparison Study",
            "Compare multiple groups with box plots",
            "Analysis",
            TemplateConfig {
                show_outliers: Some(true),
                show_data_points: Some(true),
                ..TemplateConfig::new(ChartType::Box, "Group Comparison Analysis", "colorful")
            },
        ),
    ]
}

/// Look up a built-in template by id.
pub fn template(id: &str) -> Option<Template> {
    builtin_templates().into_iter().find(|t| t.id == id)
}
