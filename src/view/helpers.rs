//! Small line builders shared by the page renderers.

use super::constants::DATE_FORMAT;
use chrono::NaiveDate;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// A blank line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `label: value` with the label in `label_style`.
pub fn key_value_line<'a>(label: &'a str, value: impl Into<String>, label_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::raw(value.into()),
    ])
}

/// Format a date the way the dashboard shows deadlines ("Mar 1, 2024").
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Score out of ten, one decimal ("8.5/10").
pub fn format_score(score: f64) -> String {
    format!("{score:.1}/10")
}
