//! Per-value coercion probes used by the column classifier.
//!
//! Each probe returns `None` on failure; nothing here panics or errors.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================

/// Ordinal day suffixes ("5th", "21st") that chrono cannot parse.
static ORDINAL_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").unwrap());

/// Year-month values such as "2024-03" or "2024/3".
static YEAR_MONTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})[-/](\d{1,2})$").unwrap());

/// Month-name and year values such as "Jan 2024" or "January-2024".
static MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]{3,9})\.?[\s,\-]+(\d{4})$").unwrap());

/// Lowest year accepted from a `%Y` field.
///
/// chrono's `%Y` also takes one or two digits, which would read "1/5/24" as
/// year 24. Such values are left to the `%y` layouts.
const MIN_YEAR: i32 = 1000;

/// Timestamps without an offset. `%.f` also accepts a missing fraction.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%m-%d-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%y %H:%M",
];

/// Timestamps carrying a UTC offset.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%z", "%Y-%m-%dT%H:%M:%S%.f%z"];

/// Date-only forms. Month-first is tried before day-first, four-digit years
/// before two-digit ones. `%b` accepts full month names as well as
/// abbreviations.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
    "%d %b, %Y",
    "%d-%b-%Y",
    "%m/%d/%y",
    "%d/%m/%y",
    "%m-%d-%y",
    "%d-%m-%y",
    "%d.%m.%y",
    "%d-%b-%y",
];

/// Coerce a value to a floating-point number.
pub fn try_parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parse a value as a calendar date or timestamp, inferring the format.
///
/// Date-only values resolve to midnight, month-only values to the first of
/// the month. Offsets are normalised to UTC.
pub fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();

    // Every supported layout carries at least one digit
    if !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    let normalized = ORDINAL_SUFFIX.replace_all(trimmed, "$1");
    let candidate = normalized.as_ref();

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(candidate, format) {
            return Some(dt.naive_utc());
        }
    }

    let datetime = DATETIME_FORMATS
        .iter()
        .filter_map(|format| NaiveDateTime::parse_from_str(candidate, format).ok())
        .find(|dt| dt.year() >= MIN_YEAR);
    if datetime.is_some() {
        return datetime;
    }

    let date = DATE_FORMATS
        .iter()
        .filter_map(|format| NaiveDate::parse_from_str(candidate, format).ok())
        .find(|date| date.year() >= MIN_YEAR);
    if let Some(date) = date {
        return date.and_hms_opt(0, 0, 0);
    }

    if let Some(caps) = YEAR_MONTH.captures(candidate) {
        let year = caps[1].parse::<i32>().ok()?;
        let month = caps[2].parse::<u32>().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0);
    }

    if let Some(caps) = MONTH_YEAR.captures(candidate) {
        let first_of_month = format!("1 {} {}", &caps[1], &caps[2]);
        return NaiveDate::parse_from_str(&first_of_month, "%d %b %Y")
            .ok()?
            .and_hms_opt(0, 0, 0);
    }

    DateTime::parse_from_rfc2822(candidate)
        .ok()
        .map(|dt| dt.naive_utc())
}
