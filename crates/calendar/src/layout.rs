//! Precomputed month and non-counting-day tables for one kind of year.
//!
//! A calendar year's structure depends only on whether it is a leap year,
//! so every [`CalendarDefinition`](crate::CalendarDefinition) carries two
//! layouts built once at construction time.

use std::ops::Range;

use crate::definition::{MonthDefinition, MonthKind};
use crate::festival::FestivalDefinition;

/// Month boundaries and weekday-skipping days for a regular or leap year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct YearLayout {
    leap: bool,
    month_days: Vec<u32>,
    month_starts: Vec<u32>,
    days: u32,
    /// `non_counting_prefix[d]` is the number of non-counting days in `0..d`.
    non_counting_prefix: Vec<u32>,
}

impl YearLayout {
    pub(crate) fn new(
        months: &[MonthDefinition],
        festivals: &[FestivalDefinition],
        leap: bool,
    ) -> Self {
        let month_days: Vec<u32> = months.iter().map(|m| m.days_in(leap)).collect();
        let mut month_starts = Vec::with_capacity(month_days.len());
        let mut days = 0u32;
        for &len in &month_days {
            month_starts.push(days);
            days += len;
        }

        let mut layout = Self {
            leap,
            month_days,
            month_starts,
            days,
            non_counting_prefix: Vec::new(),
        };

        let mut skipped = vec![false; days as usize];
        for (m, month) in months.iter().enumerate() {
            if month.kind == MonthKind::Intercalary {
                for flag in &mut skipped[layout.month_range(m)] {
                    *flag = true;
                }
            }
        }
        for festival in festivals.iter().filter(|f| !f.counts_for_weekday) {
            if let Some(span) = festival.span_in(&layout) {
                for flag in &mut skipped[span.start as usize..span.end as usize] {
                    *flag = true;
                }
            }
        }

        let mut prefix = Vec::with_capacity(skipped.len() + 1);
        let mut running = 0u32;
        prefix.push(0);
        for flag in skipped {
            running += u32::from(flag);
            prefix.push(running);
        }
        layout.non_counting_prefix = prefix;
        layout
    }

    pub(crate) fn is_leap(&self) -> bool {
        self.leap
    }

    /// Total days in the year.
    pub(crate) fn days(&self) -> u32 {
        self.days
    }

    pub(crate) fn month_count(&self) -> usize {
        self.month_days.len()
    }

    /// Days in month `m`, or 0 if the month does not exist.
    pub(crate) fn month_days(&self, m: usize) -> u32 {
        self.month_days.get(m).copied().unwrap_or(0)
    }

    /// Day of year on which month `m` starts. Months past the end start at
    /// the year's length.
    pub(crate) fn month_start(&self, m: usize) -> u32 {
        self.month_starts.get(m).copied().unwrap_or(self.days)
    }

    fn month_range(&self, m: usize) -> Range<usize> {
        let start = self.month_start(m) as usize;
        start..start + self.month_days(m) as usize
    }

    /// 0-based day of year for a month index and 0-based day of month.
    pub(crate) fn day_of_year(&self, month: usize, day: u32) -> u32 {
        self.month_start(month) + day
    }

    /// Splits a day of year into `(month, day_of_month)`.
    ///
    /// Days past the end of the year land in the last month.
    pub(crate) fn locate(&self, day_of_year: u32) -> (usize, u32) {
        let mut remaining = day_of_year;
        let last = self.month_days.len().saturating_sub(1);
        for (m, &len) in self.month_days.iter().enumerate() {
            if remaining < len || m == last {
                return (m, remaining);
            }
            remaining -= len;
        }
        (0, remaining)
    }

    /// Number of non-counting days strictly before `day_of_year`.
    pub(crate) fn non_counting_before(&self, day_of_year: u32) -> u32 {
        let idx = (day_of_year as usize).min(self.non_counting_prefix.len() - 1);
        self.non_counting_prefix[idx]
    }

    /// Number of non-counting days in `start..end`.
    pub(crate) fn non_counting_between(&self, start: u32, end: u32) -> u32 {
        self.non_counting_before(end)
            .saturating_sub(self.non_counting_before(start))
    }

    /// Number of non-counting days in the whole year.
    pub(crate) fn non_counting_total(&self) -> u32 {
        self.non_counting_before(self.days)
    }

    /// Whether `day_of_year` itself is skipped by the weekday count.
    pub(crate) fn is_non_counting(&self, day_of_year: u32) -> bool {
        self.non_counting_between(day_of_year, day_of_year + 1) == 1
    }
}
