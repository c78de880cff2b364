//! Upcoming birthday window.
//!
//! A window covers `today` and the following `days` calendar days. Matching
//! ignores the birth year and compares month and day only, walking real
//! calendar dates so windows roll over month and year ends.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};

/// Upper bound for the window length so it never wraps past a full year.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Set of (month, day) pairs whose birthdays fall in the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayWindow {
    start: NaiveDate,
    end: NaiveDate,
    month_days: BTreeSet<(u32, u32)>,
}

impl BirthdayWindow {
    /// Window of `today..=today + days`.
    ///
    /// `days` above [`MAX_WINDOW_DAYS`] is capped. A 29 February birthday is
    /// celebrated on 28 February in common years, so `(2, 29)` joins the set
    /// whenever a common-year 28 February is inside the window.
    pub fn starting(today: NaiveDate, days: u32) -> Self {
        let days = days.min(MAX_WINDOW_DAYS);
        let mut month_days = BTreeSet::new();
        let mut end = today;

        for offset in 0..=u64::from(days) {
            let Some(date) = today.checked_add_days(Days::new(offset)) else {
                break;
            };
            end = date;
            month_days.insert((date.month(), date.day()));
            if date.month() == 2 && date.day() == 28 && !is_leap_year(date.year()) {
                month_days.insert((2, 29));
            }
        }

        Self {
            start: today,
            end,
            month_days,
        }
    }

    /// First day of the window.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether a birthdate's anniversary falls inside the window.
    pub fn contains(&self, birthdate: NaiveDate) -> bool {
        self.month_days.contains(&(birthdate.month(), birthdate.day()))
    }

    /// Month and day pairs in calendar order, split into parallel columns
    /// for binding as SQL arrays.
    pub fn month_day_columns(&self) -> (Vec<i32>, Vec<i32>) {
        self.month_days
            .iter()
            .map(|&(month, day)| (month as i32, day as i32))
            .unzip()
    }

    /// Number of distinct (month, day) pairs matched.
    pub fn len(&self) -> usize {
        self.month_days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.month_days.is_empty()
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
