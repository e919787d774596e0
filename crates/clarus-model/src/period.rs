//! Calendar period keys for grouping and filtering.
//!
//! Keys order chronologically (year before subdivision), never
//! lexicographically, so periods spanning a year boundary sort correctly.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ModelError;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name for a 1-based calendar month.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// A calendar month within a specific year, e.g. `2024-01`.
///
/// Field order (year, then month) makes the derived `Ord` chronological.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse a `YYYY-MM` key, as printed by `Display`.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let invalid = || ModelError::InvalidMonthKey(raw.to_string());
        let (year, month) = raw.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Human-readable label, e.g. "January 2024".
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A calendar quarter within a specific year, e.g. `2024-Q1`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct QuarterKey {
    pub year: i32,
    pub quarter: u32,
}

impl QuarterKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            quarter: date.month0() / 3 + 1,
        }
    }
}

impl fmt::Display for QuarterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-Q{}", self.year, self.quarter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn month_keys_sort_chronologically_across_year_boundary() {
        let mut keys = vec![
            MonthKey::new(2024, 2),
            MonthKey::new(2023, 12),
            MonthKey::new(2024, 1),
            MonthKey::new(2023, 11),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                MonthKey::new(2023, 11),
                MonthKey::new(2023, 12),
                MonthKey::new(2024, 1),
                MonthKey::new(2024, 2),
            ]
        );
    }

    #[test]
    fn month_key_display_and_parse_round_trip() {
        let key = MonthKey::new(2024, 3);
        assert_eq!(key.to_string(), "2024-03");
        assert_eq!(MonthKey::parse("2024-03").unwrap(), key);
    }

    #[test]
    fn month_key_parse_rejects_garbage() {
        assert!(MonthKey::parse("202403").is_err());
        assert!(MonthKey::parse("2024-13").is_err());
        assert!(MonthKey::parse("2024-x").is_err());
    }

    #[test]
    fn month_key_contains_only_its_own_days() {
        let key = MonthKey::new(2024, 2);
        assert!(key.contains(date(2024, 2, 29)));
        assert!(!key.contains(date(2024, 3, 1)));
        assert!(!key.contains(date(2023, 2, 15)));
    }

    #[test]
    fn month_label_is_human_readable() {
        assert_eq!(MonthKey::new(2024, 1).label(), "January 2024");
        assert_eq!(MonthKey::new(2023, 12).label(), "December 2023");
    }

    #[test]
    fn quarter_key_from_date() {
        assert_eq!(QuarterKey::from_date(date(2024, 1, 15)).to_string(), "2024-Q1");
        assert_eq!(QuarterKey::from_date(date(2024, 3, 31)).to_string(), "2024-Q1");
        assert_eq!(QuarterKey::from_date(date(2024, 4, 1)).to_string(), "2024-Q2");
        assert_eq!(QuarterKey::from_date(date(2024, 12, 31)).to_string(), "2024-Q4");
    }
}
