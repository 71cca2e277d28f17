//! Festivals and the days they occupy.

use std::ops::Range;

use crate::definition::{CalendarDefinition, MonthDay};
use crate::error::CalendarError;
use crate::layout::YearLayout;
use crate::time::TimeComponents;

/// Where in the year a festival starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FestivalAnchor {
    /// A fixed 0-based day of the year.
    DayOfYear(u32),
    /// A day inside a specific month.
    MonthDay(MonthDay),
}

/// A named festival spanning one or more days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FestivalDefinition {
    /// Display name.
    pub name: String,
    /// First day of the festival.
    pub anchor: FestivalAnchor,
    /// Length in days in regular years.
    pub duration: u32,
    /// Length in days in leap years, if different.
    pub leap_duration: Option<u32>,
    /// Only observed in leap years.
    pub leap_year_only: bool,
    /// Whether festival days advance the weekday cycle.
    pub counts_for_weekday: bool,
}

impl FestivalDefinition {
    /// Creates a one-day festival on a fixed day of the year.
    pub fn on_day_of_year(name: impl Into<String>, day_of_year: u32) -> Self {
        Self::new(name, FestivalAnchor::DayOfYear(day_of_year))
    }

    /// Creates a one-day festival on a month and day.
    pub fn on_month_day(name: impl Into<String>, date: MonthDay) -> Self {
        Self::new(name, FestivalAnchor::MonthDay(date))
    }

    fn new(name: impl Into<String>, anchor: FestivalAnchor) -> Self {
        Self {
            name: name.into(),
            anchor,
            duration: 1,
            leap_duration: None,
            leap_year_only: false,
            counts_for_weekday: true,
        }
    }

    /// Sets the festival length in regular years.
    pub fn with_duration(mut self, days: u32) -> Self {
        self.duration = days;
        self
    }

    /// Sets a different festival length for leap years.
    pub fn with_leap_duration(mut self, days: u32) -> Self {
        self.leap_duration = Some(days);
        self
    }

    /// Restricts the festival to leap years.
    pub fn leap_year_only(mut self) -> Self {
        self.leap_year_only = true;
        self
    }

    /// Excludes the festival's days from the weekday cycle.
    pub fn skips_weekday(mut self) -> Self {
        self.counts_for_weekday = false;
        self
    }

    /// Festival length for a regular or leap year.
    pub fn duration_in(&self, leap: bool) -> u32 {
        if leap {
            self.leap_duration.unwrap_or(self.duration)
        } else {
            self.duration
        }
    }

    /// Days of the year covered by this festival, clipped to the year's end.
    ///
    /// Returns `None` when the festival is not observed in this kind of year
    /// or its anchor does not exist in it.
    pub(crate) fn span_in(&self, layout: &YearLayout) -> Option<Range<u32>> {
        let leap = layout.is_leap();
        if self.leap_year_only && !leap {
            return None;
        }
        let start = match self.anchor {
            FestivalAnchor::DayOfYear(d) => d,
            FestivalAnchor::MonthDay(MonthDay { month, day }) => {
                if month >= layout.month_count() || day >= layout.month_days(month) {
                    return None;
                }
                layout.day_of_year(month, day)
            }
        };
        if start >= layout.days() {
            return None;
        }
        let end = start.saturating_add(self.duration_in(leap)).min(layout.days());
        Some(start..end)
    }

    pub(crate) fn validate(&self, month_count: usize) -> Result<(), CalendarError> {
        let invalid = |reason: String| CalendarError::InvalidFestival {
            name: self.name.clone(),
            reason,
        };
        if self.duration == 0 {
            return Err(invalid("duration must be >= 1".to_string()));
        }
        if let FestivalAnchor::MonthDay(date) = self.anchor {
            if date.month >= month_count {
                return Err(invalid(format!(
                    "month index {} out of range (calendar has {month_count} months)",
                    date.month
                )));
            }
        }
        Ok(())
    }
}

impl CalendarDefinition {
    /// Festivals observed on the day described by `c`.
    pub fn festivals_on(&self, c: &TimeComponents) -> Vec<&FestivalDefinition> {
        let layout = self.layout(c.year);
        let doy = self.day_of_year(c);
        self.festivals()
            .iter()
            .filter(|f| f.span_in(layout).is_some_and(|span| span.contains(&doy)))
            .collect()
    }

    /// Whether the day described by `c` is skipped by the weekday cycle.
    pub fn is_non_counting_day(&self, c: &TimeComponents) -> bool {
        self.layout(c.year).is_non_counting(self.day_of_year(c))
    }
}
