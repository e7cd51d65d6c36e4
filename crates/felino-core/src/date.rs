//! Calendar-date keys for daily plans and completion records.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar date in the process-local timezone, used as the store key
/// for daily plans and completion records. Renders as ISO `YYYY-MM-DD`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlanDate(NaiveDate);

impl PlanDate {
    /// Today according to the local clock.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The previous calendar day.
    pub fn previous_day(self) -> Self {
        Self(self.0 - Duration::days(1))
    }

    /// The date `n` days before this one.
    pub fn days_back(self, n: i64) -> Self {
        Self(self.0 - Duration::days(n))
    }

    /// The first day of this date's month.
    pub fn month_start(self) -> Self {
        self.0.with_day(1).map(Self).unwrap_or(self)
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for PlanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for PlanDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> PlanDate {
        PlanDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn parse_display_roundtrip() {
        let parsed: PlanDate = "2026-08-06".parse().unwrap();
        assert_eq!(parsed, date(2026, 8, 6));
        assert_eq!(parsed.to_string(), "2026-08-06");
    }

    #[test]
    fn rejects_non_iso_strings() {
        assert!("06/08/2026".parse::<PlanDate>().is_err());
        assert!("2026-8-6x".parse::<PlanDate>().is_err());
    }

    #[test]
    fn previous_day_crosses_month_boundary() {
        assert_eq!(date(2026, 3, 1).previous_day(), date(2026, 2, 28));
        assert_eq!(date(2026, 1, 1).previous_day(), date(2025, 12, 31));
    }

    #[test]
    fn days_back_spans_weeks() {
        assert_eq!(date(2026, 8, 6).days_back(6), date(2026, 7, 31));
        assert_eq!(date(2026, 8, 6).days_back(0), date(2026, 8, 6));
    }

    #[test]
    fn month_start_pins_first_day() {
        assert_eq!(date(2026, 8, 6).month_start(), date(2026, 8, 1));
        assert_eq!(date(2026, 8, 1).month_start(), date(2026, 8, 1));
    }

    #[test]
    fn orders_chronologically() {
        assert!(date(2026, 8, 5) < date(2026, 8, 6));
        assert!(date(2025, 12, 31) < date(2026, 1, 1));
    }

    #[test]
    fn serializes_as_iso_string() {
        let json = serde_json::to_string(&date(2026, 8, 6)).unwrap();
        assert_eq!(json, "\"2026-08-06\"");
        let back: PlanDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date(2026, 8, 6));
    }
}
