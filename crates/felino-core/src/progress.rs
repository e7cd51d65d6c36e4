//! Progress statistics derived from the completion history.
//!
//! Four independent pure functions plus a bundling summary. All take
//! the record collection and an explicit `today`; none mutate their
//! input.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::date::PlanDate;
use crate::plan::CompletionRecord;

/// The four display statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub streak_days: u32,
    pub weekly_score: u32,
    pub monthly_score: u32,
    pub lifetime_total: u32,
}

/// Consecutive fully-completed days ending at `today`.
///
/// A date qualifies when its record's entries are all `true`; an empty
/// record qualifies vacuously. The walk stops at the first date with no
/// qualifying record.
pub fn streak(records: &[CompletionRecord], today: PlanDate) -> u32 {
    let complete_dates: BTreeSet<PlanDate> = records
        .iter()
        .filter(|record| record.is_fully_completed())
        .map(|record| record.date)
        .collect();

    let mut days = 0;
    let mut cursor = today;
    while complete_dates.contains(&cursor) {
        days += 1;
        cursor = cursor.previous_day();
    }
    days
}

/// Completed-item count over the trailing seven calendar days
/// (`today - 6 ..= today`).
pub fn weekly_score(records: &[CompletionRecord], today: PlanDate) -> u32 {
    window_score(records, today.days_back(6), today)
}

/// Completed-item count from the first of the current month through
/// `today`.
pub fn monthly_score(records: &[CompletionRecord], today: PlanDate) -> u32 {
    window_score(records, today.month_start(), today)
}

/// Completed-item count over all recorded history.
pub fn lifetime_total(records: &[CompletionRecord]) -> u32 {
    records
        .iter()
        .map(|record| record.completed_count() as u32)
        .sum()
}

fn window_score(records: &[CompletionRecord], from: PlanDate, to: PlanDate) -> u32 {
    records
        .iter()
        .filter(|record| record.date >= from && record.date <= to)
        .map(|record| record.completed_count() as u32)
        .sum()
}

/// All four statistics in one bundle.
pub fn summarize(records: &[CompletionRecord], today: PlanDate) -> ProgressSummary {
    ProgressSummary {
        streak_days: streak(records, today),
        weekly_score: weekly_score(records, today),
        monthly_score: monthly_score(records, today),
        lifetime_total: lifetime_total(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> PlanDate {
        PlanDate::from_ymd(year, month, day).unwrap()
    }

    fn record(d: PlanDate, entries: &[(&str, bool)]) -> CompletionRecord {
        let mut record = CompletionRecord::empty(d);
        for (id, done) in entries {
            record.items.insert((*id).to_string(), *done);
        }
        record
    }

    #[test]
    fn streak_counts_consecutive_complete_days() {
        let today = date(2026, 8, 6);
        let records = vec![
            record(today, &[("a", true), ("b", true)]),
            record(today.days_back(1), &[("a", true)]),
            record(today.days_back(2), &[("b", true)]),
            // no record for today - 3
            record(today.days_back(4), &[("a", true)]),
        ];
        assert_eq!(streak(&records, today), 3);
    }

    #[test]
    fn streak_is_zero_without_todays_record() {
        let today = date(2026, 8, 6);
        let records = vec![record(today.days_back(1), &[("a", true)])];
        assert_eq!(streak(&records, today), 0);
    }

    #[test]
    fn empty_record_is_vacuously_complete() {
        let today = date(2026, 8, 6);
        let records = vec![
            record(today, &[]),
            record(today.days_back(1), &[("a", true)]),
        ];
        assert_eq!(streak(&records, today), 2);
    }

    #[test]
    fn open_entry_breaks_the_streak() {
        let today = date(2026, 8, 6);
        let records = vec![
            record(today, &[("a", true), ("b", false)]),
            record(today.days_back(1), &[("a", true)]),
        ];
        assert_eq!(streak(&records, today), 0);
    }

    #[test]
    fn weekly_window_spans_seven_days_inclusive() {
        let today = date(2026, 8, 6);
        let records = vec![
            record(today, &[("a", true)]),
            // 7th day of the window, counted inclusively of today
            record(today.days_back(6), &[("b", true), ("c", true)]),
            // one day past the window
            record(today.days_back(7), &[("d", true)]),
        ];
        assert_eq!(weekly_score(&records, today), 3);
    }

    #[test]
    fn weekly_score_counts_only_done_entries() {
        let today = date(2026, 8, 6);
        let records = vec![record(today, &[("a", true), ("b", false), ("c", true)])];
        assert_eq!(weekly_score(&records, today), 2);
    }

    #[test]
    fn monthly_window_starts_on_the_first() {
        let today = date(2026, 8, 6);
        let records = vec![
            record(date(2026, 8, 1), &[("a", true)]),
            record(date(2026, 7, 31), &[("b", true)]),
            record(today, &[("c", true)]),
        ];
        assert_eq!(monthly_score(&records, today), 2);
    }

    #[test]
    fn lifetime_total_ignores_dates() {
        let records = vec![
            record(date(2024, 1, 1), &[("a", true)]),
            record(date(2026, 8, 6), &[("b", true), ("c", false)]),
        ];
        assert_eq!(lifetime_total(&records), 2);
    }

    #[test]
    fn summary_bundles_all_four() {
        let today = date(2026, 8, 6);
        let records = vec![
            record(today, &[("a", true)]),
            record(today.days_back(1), &[("b", true)]),
        ];
        let summary = summarize(&records, today);
        assert_eq!(
            summary,
            ProgressSummary {
                streak_days: 2,
                weekly_score: 2,
                monthly_score: 2,
                lifetime_total: 2,
            }
        );
    }
}
