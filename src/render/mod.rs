//! Terminal output formatting: two-column tables and timestamps.

use chrono::DateTime;
use std::fmt;

/// A two-column (Metric, Value) table with box-drawing borders.
///
/// Widths are computed from the widest cell in each column. Rendering
/// goes through `Display`, so tables can be printed directly or
/// captured as strings in tests.
#[derive(Debug, Clone)]
pub struct Table {
    title: String,
    rows: Vec<(String, String)>,
}

const METRIC_HEADER: &str = "Metric";
const VALUE_HEADER: &str = "Value";

impl Table {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, metric: impl Into<String>, value: impl Into<String>) -> Self {
        self.rows.push((metric.into(), value.into()));
        self
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metric_width = self
            .rows
            .iter()
            .map(|(m, _)| m.chars().count())
            .chain([METRIC_HEADER.len()])
            .max()
            .unwrap_or(0);
        let value_width = self
            .rows
            .iter()
            .map(|(_, v)| v.chars().count())
            .chain([VALUE_HEADER.len()])
            .max()
            .unwrap_or(0);

        let rule = |left: &str, mid: &str, right: &str| {
            format!(
                "{left}{}{mid}{}{right}",
                "─".repeat(metric_width + 2),
                "─".repeat(value_width + 2)
            )
        };

        writeln!(f, " {}", self.title)?;
        writeln!(f, "{}", rule("┌", "┬", "┐"))?;
        writeln!(
            f,
            "│ {METRIC_HEADER:<metric_width$} │ {VALUE_HEADER:<value_width$} │"
        )?;
        writeln!(f, "{}", rule("├", "┼", "┤"))?;
        for (metric, value) in &self.rows {
            writeln!(f, "│ {metric:<metric_width$} │ {value:<value_width$} │")?;
        }
        write!(f, "{}", rule("└", "┴", "┘"))
    }
}

/// Box a single line of text in a double-rule border. The border is
/// sized from the text, so it stays aligned whatever the version
/// string interpolates to.
pub fn banner(text: &str) -> String {
    let rule = "═".repeat(text.chars().count() + 6);
    format!("╔{rule}╗\n║   {text}   ║\n╚{rule}╝")
}

/// Render a millisecond Unix epoch as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn fmt_utc_millis(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("invalid timestamp {millis}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funding_time_renders_as_utc() {
        assert_eq!(fmt_utc_millis(1_700_000_000_000), "2023-11-14 22:13:20 UTC");
    }

    #[test]
    fn test_epoch_renders_as_utc() {
        assert_eq!(fmt_utc_millis(0), "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_out_of_range_timestamp_does_not_panic() {
        assert!(fmt_utc_millis(i64::MAX).contains("invalid timestamp"));
    }

    #[test]
    fn test_banner_borders_match_content_width() {
        for text in ["futures-pulse v0.1.0", "futures-pulse v10.22.333  ·  x"] {
            let rendered = banner(text);
            let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
            assert_eq!(widths.len(), 3);
            assert!(widths.windows(2).all(|w| w[0] == w[1]), "{rendered}");
            assert!(rendered.contains(text));
        }
    }

    #[test]
    fn test_table_contains_title_and_cells() {
        let table = Table::new("Price Information for BTCUSDT")
            .row("Last Price", "42000.10")
            .row("Volume", "8913.30000000");
        let rendered = table.to_string();
        assert!(rendered.contains("Price Information for BTCUSDT"));
        assert!(rendered.contains("Last Price"));
        assert!(rendered.contains("42000.10"));
        assert!(rendered.contains("8913.30000000"));
    }

    #[test]
    fn test_table_columns_align() {
        let table = Table::new("t").row("a", "bb").row("long metric", "v");
        let rendered = table.to_string();
        let widths: Vec<usize> = rendered
            .lines()
            .skip(1) // title line
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{rendered}");
    }
}
