//! End-to-end tests for the Vizier analysis pipeline.

use std::io::Write;
use tempfile::NamedTempFile;

use vizier::suggestion::ROW_INDEX_AXIS;
use vizier::{ChartType, ColumnRole, ColumnType, Vizier, VizierError};

/// Helper to create a temporary file with the given extension and content.
fn create_test_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

/// A year of daily revenue across five regions.
fn daily_sales() -> String {
    let regions = ["North", "South", "East", "West", "Central"];
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let mut data = String::from("date,revenue,region\n");
    for day in 0..365 {
        let date = start + chrono::Duration::days(day);
        data.push_str(&format!(
            "{},{:.2},{}\n",
            date.format("%Y-%m-%d"),
            1000.0 + day as f64 * 3.5,
            regions[day as usize % regions.len()]
        ));
    }
    data
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn test_daily_sales_classification() {
    let file = create_test_file(".csv", &daily_sales());
    let analysis = Vizier::new().analyze(file.path()).unwrap();

    assert_eq!(analysis.row_count, 365);

    let date = &analysis.column_info["date"];
    assert_eq!(date.column_type, ColumnType::Datetime);
    assert_eq!(date.suggestions, vec![ColumnRole::XAxis, ColumnRole::FilterDate]);
    assert_eq!(date.unique_count, 100);

    let revenue = &analysis.column_info["revenue"];
    assert_eq!(revenue.column_type, ColumnType::Numeric);
    assert_eq!(revenue.suggestions, vec![ColumnRole::YAxis, ColumnRole::FilterRange]);

    let region = &analysis.column_info["region"];
    assert_eq!(region.column_type, ColumnType::Categorical);
    assert_eq!(region.unique_count, 5);
    assert!(region.has_role(ColumnRole::Grouping));
    assert_eq!(region.sample_values, vec!["North", "South", "East", "West", "Central"]);
}

#[test]
fn test_daily_sales_suggestions() {
    let file = create_test_file(".csv", &daily_sales());
    let analysis = Vizier::new().analyze(file.path()).unwrap();

    let ids: Vec<&str> = analysis.suggestions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["timeseries", "category_comparison"]);

    let ts = &analysis.suggestions[0];
    assert_eq!(ts.confidence, 0.9);
    assert_eq!(ts.config.chart_type, ChartType::Line);
    assert_eq!(ts.config.x_axis, "date");
    assert_eq!(ts.config.left_y_axes, vec!["revenue"]);

    let cat = &analysis.suggestions[1];
    assert_eq!(cat.confidence, 0.8);
    assert_eq!(cat.config.chart_type, ChartType::Box);
    assert_eq!(cat.config.x_axis, "region");
}

#[test]
fn test_all_null_column() {
    let file = create_test_file(".csv", "id,notes\n1,\n2,NA\n3,\n4,null\n");
    let analysis = Vizier::new().analyze(file.path()).unwrap();

    let notes = &analysis.column_info["notes"];
    assert_eq!(notes.column_type, ColumnType::Categorical);
    assert_eq!(notes.unique_count, 0);
    assert_eq!(notes.null_count, 4);
    assert!(notes.suggestions.is_empty());
    assert!(notes.sample_values.is_empty());
}

#[test]
fn test_mostly_numeric_with_noise() {
    // 9 of 10 values parse: 0.9 > 0.8
    let mut data = String::from("reading\n");
    for i in 0..9 {
        data.push_str(&format!("{}.5\n", i));
    }
    data.push_str("error\n");

    let file = create_test_file(".csv", &data);
    let analysis = Vizier::new().analyze(file.path()).unwrap();
    assert_eq!(analysis.column_info["reading"].column_type, ColumnType::Numeric);
}

#[test]
fn test_exactly_eighty_percent_is_not_numeric() {
    let data = "code\n1\n2\n3\n4\n5\n6\n7\n8\nx\ny\n";
    let file = create_test_file(".csv", data);
    let analysis = Vizier::new().analyze(file.path()).unwrap();

    let code = &analysis.column_info["code"];
    assert_eq!(code.column_type, ColumnType::Categorical);
    assert!(!code.has_role(ColumnRole::Grouping));
}

// =============================================================================
// Suggestions
// =============================================================================

#[test]
fn test_single_numeric_column() {
    let file = create_test_file(".csv", "value\n1\n2\n3\n");
    let analysis = Vizier::new().analyze(file.path()).unwrap();
    assert!(analysis.suggestions.is_empty());
}

#[test]
fn test_numeric_only_dataset() {
    let file = create_test_file(".csv", "a,b,c,d\n1,2,3,4\n5,6,7,8\n9,10,11,12\n");
    let analysis = Vizier::new().analyze(file.path()).unwrap();

    let ids: Vec<&str> = analysis.suggestions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["correlation", "multi_metric"]);
    assert_eq!(analysis.suggestions[1].config.x_axis, ROW_INDEX_AXIS);
}

// =============================================================================
// Input handling
// =============================================================================

#[test]
fn test_tsv_input() {
    let file = create_test_file(".tsv", "when\tamount\n2024-03-01\t4\n2024-03-02\t7\n");
    let analysis = Vizier::new().analyze(file.path()).unwrap();

    assert_eq!(analysis.columns, vec!["when", "amount"]);
    assert_eq!(analysis.source.format, "tsv");
    assert_eq!(analysis.column_info["when"].column_type, ColumnType::Datetime);
}

#[test]
fn test_unsupported_format() {
    let file = create_test_file(".xlsx", "a,b\n1,2\n");
    let err = Vizier::new().analyze(file.path()).unwrap_err();
    assert!(matches!(err, VizierError::UnsupportedFormat(_)));
}

#[test]
fn test_empty_file() {
    let file = create_test_file(".csv", "");
    let err = Vizier::new().analyze(file.path()).unwrap_err();
    assert!(matches!(err, VizierError::EmptyData(_)));
}

#[test]
fn test_header_only() {
    let file = create_test_file(".csv", "x,y\n");
    let analysis = Vizier::new().analyze(file.path()).unwrap();

    assert_eq!(analysis.row_count, 0);
    assert!(analysis
        .column_info
        .values()
        .all(|info| info.column_type == ColumnType::Categorical));
    assert!(analysis.suggestions.is_empty());
}

#[test]
fn test_same_content_same_id() {
    let data = daily_sales();
    let a = Vizier::new().analyze_bytes("a.csv", data.as_bytes()).unwrap();
    let b = Vizier::new().analyze_bytes("b.csv", data.as_bytes()).unwrap();

    assert_eq!(a.id, b.id);
    assert_eq!(a.column_info, b.column_info);
    assert_eq!(a.suggestions, b.suggestions);
}

// =============================================================================
// Statistics
// =============================================================================

#[test]
fn test_statistics_for_daily_sales() {
    use vizier::ColumnStatistics;

    let file = create_test_file(".csv", &daily_sales());
    let stats = Vizier::new()
        .statistics(file.path(), &["revenue", "region"])
        .unwrap();

    let ColumnStatistics::Numeric(revenue) = &stats["revenue"] else {
        panic!("revenue should be numeric");
    };
    assert_eq!(revenue.count, 365);
    assert_eq!(revenue.min, Some(1000.0));
    assert_eq!(revenue.max, Some(1000.0 + 364.0 * 3.5));

    let ColumnStatistics::Categorical(region) = &stats["region"] else {
        panic!("region should be categorical");
    };
    assert_eq!(region.unique, 5);
    assert_eq!(region.top_values["North"], 73);
}
