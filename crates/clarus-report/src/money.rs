//! Money, count, and percentage formatting for display.

use num_format::{Buffer, Locale};

/// Format a count with thousands separators, e.g. `12,345`.
pub fn format_count(value: usize) -> String {
    let mut buffer = Buffer::default();
    buffer.write_formatted(&value, &Locale::en);
    buffer.as_str().to_string()
}

/// Format a monetary amount as dollars and cents, e.g. `$1,234.50`.
pub fn format_money(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let mut buffer = Buffer::default();
    buffer.write_formatted(&(cents / 100), &Locale::en);
    format!("{sign}${}.{:02}", buffer.as_str(), cents % 100)
}

/// Format a percentage with one decimal place, e.g. `42.5%`.
pub fn format_pct(value: f64) -> String {
    format!("{value:.1}%")
}
