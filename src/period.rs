// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Symbolic, calendar-aware time windows.
//!
//! Each period resolves to a concrete half-open `[start, end)` interval
//! relative to a supplied "now". The named calendar periods (this/last
//! week/month/year) follow real calendar boundaries — weeks start on Monday,
//! months and years on their first day — not fixed 7/30/365-day offsets. The
//! rolling `lastNDays` variants are plain offsets ending at `now`.
//!
//! All arithmetic is UTC. Callers pinned to a local calendar pass a
//! pre-shifted `now`.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// The twelve symbolic windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelativeDatePeriod {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
    #[serde(rename = "last24Hours")]
    Last24Hours,
    Last7Days,
    Last30Days,
    Last90Days,
}

/// All variants, for iteration in tests and UI pickers.
pub const ALL_PERIODS: [RelativeDatePeriod; 12] = [
    RelativeDatePeriod::Today,
    RelativeDatePeriod::Yesterday,
    RelativeDatePeriod::ThisWeek,
    RelativeDatePeriod::LastWeek,
    RelativeDatePeriod::ThisMonth,
    RelativeDatePeriod::LastMonth,
    RelativeDatePeriod::ThisYear,
    RelativeDatePeriod::LastYear,
    RelativeDatePeriod::Last24Hours,
    RelativeDatePeriod::Last7Days,
    RelativeDatePeriod::Last30Days,
    RelativeDatePeriod::Last90Days,
];

impl RelativeDatePeriod {
    /// Resolve to a concrete `[start, end)` interval relative to `now`.
    pub fn resolve(self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let today = now.date_naive();
        match self {
            RelativeDatePeriod::Today => {
                let start = day_start(today);
                (start, start + Duration::days(1))
            }
            RelativeDatePeriod::Yesterday => {
                let end = day_start(today);
                (end - Duration::days(1), end)
            }
            RelativeDatePeriod::ThisWeek => {
                let start = day_start(week_start(today));
                (start, start + Duration::days(7))
            }
            RelativeDatePeriod::LastWeek => {
                let end = day_start(week_start(today));
                (end - Duration::days(7), end)
            }
            RelativeDatePeriod::ThisMonth => {
                let first = month_start(today);
                (day_start(first), day_start(add_months(first, 1)))
            }
            RelativeDatePeriod::LastMonth => {
                let first = month_start(today);
                (day_start(sub_months(first, 1)), day_start(first))
            }
            RelativeDatePeriod::ThisYear => {
                let first = year_start(today);
                (day_start(first), day_start(add_months(first, 12)))
            }
            RelativeDatePeriod::LastYear => {
                let first = year_start(today);
                (day_start(sub_months(first, 12)), day_start(first))
            }
            RelativeDatePeriod::Last24Hours => (now - Duration::hours(24), now),
            RelativeDatePeriod::Last7Days => (now - Duration::days(7), now),
            RelativeDatePeriod::Last30Days => (now - Duration::days(30), now),
            RelativeDatePeriod::Last90Days => (now - Duration::days(90), now),
        }
    }

    /// Membership test against the resolved half-open window.
    pub fn contains(self, date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let (start, end) = self.resolve(now);
        start <= date && date < end
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 always exists; fall back to the input date to stay total.
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

fn year_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

fn sub_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months)).unwrap_or(date)
}
