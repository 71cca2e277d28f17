//! Conversion between scalar time values and structured date components.

use crate::definition::CalendarDefinition;
use crate::error::CalendarError;
use crate::layout::YearLayout;

/// A date and time of day in a calendar.
///
/// All fields are 0-based except `year`, which is the internal year
/// (display year minus the calendar's year zero) and may be negative.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeComponents {
    /// Internal year.
    pub year: i32,
    /// 0-based month index.
    pub month: usize,
    /// 0-based day of month.
    pub day_of_month: u32,
    /// Hour of day.
    pub hour: u32,
    /// Minute of hour.
    pub minute: u32,
    /// Second of minute.
    pub second: u32,
}

impl TimeComponents {
    /// Creates components at the start of the given day.
    pub const fn new(year: i32, month: usize, day_of_month: u32) -> Self {
        Self {
            year,
            month,
            day_of_month,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Sets the time of day.
    pub const fn with_time(mut self, hour: u32, minute: u32, second: u32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    /// The same components at the start of the day.
    pub const fn start_of_day(self) -> Self {
        self.with_time(0, 0, 0)
    }
}

impl CalendarDefinition {
    /// Days in internal year `year`.
    pub fn days_in_year(&self, year: i32) -> u32 {
        self.layout(year).days()
    }

    /// Days in month `month` of internal year `year`, or 0 if the month
    /// does not exist.
    pub fn days_in_month(&self, month: usize, year: i32) -> u32 {
        self.layout(year).month_days(month)
    }

    /// Sums a per-year quantity over the years between the epoch and
    /// `year`. Years before the epoch contribute negatively.
    pub(crate) fn sum_years(&self, year: i32, per_year: impl Fn(&YearLayout) -> u32) -> i64 {
        if year >= 0 {
            (0..year).map(|y| i64::from(per_year(self.layout(y)))).sum()
        } else {
            -(year..0).map(|y| i64::from(per_year(self.layout(y)))).sum::<i64>()
        }
    }

    /// Days from the epoch to the first day of internal year `year`.
    /// Negative for years before the epoch.
    pub fn days_before_year(&self, year: i32) -> i64 {
        self.sum_years(year, YearLayout::days)
    }

    /// 0-based day of year of the date in `c`.
    pub fn day_of_year(&self, c: &TimeComponents) -> u32 {
        self.layout(c.year).day_of_year(c.month, c.day_of_month)
    }

    /// Days from the epoch to the date in `c`.
    pub fn day_number(&self, c: &TimeComponents) -> i64 {
        self.days_before_year(c.year) + i64::from(self.day_of_year(c))
    }

    /// The date `day_number` days after the epoch, at the start of the day.
    ///
    /// Walks forward year by year for non-negative day numbers and backward
    /// from year -1 for negative ones.
    pub fn date_from_day_number(&self, day_number: i64) -> TimeComponents {
        let mut year = 0i32;
        let mut remaining = day_number;
        if remaining >= 0 {
            loop {
                let len = i64::from(self.days_in_year(year));
                if remaining < len {
                    break;
                }
                remaining -= len;
                year += 1;
            }
        } else {
            while remaining < 0 {
                year -= 1;
                remaining += i64::from(self.days_in_year(year));
            }
        }
        let (month, day_of_month) = self.layout(year).locate(remaining as u32);
        TimeComponents::new(year, month, day_of_month)
    }

    /// The day after `c`, keeping its time of day. Empty months are skipped.
    pub fn next_day(&self, c: &TimeComponents) -> TimeComponents {
        let layout = self.layout(c.year);
        let mut next = *c;
        next.day_of_month += 1;
        if next.day_of_month < layout.month_days(c.month) {
            return next;
        }
        next.day_of_month = 0;
        if let Some(month) = (c.month + 1..layout.month_count()).find(|&m| layout.month_days(m) > 0) {
            next.month = month;
            return next;
        }
        next.year += 1;
        next.month = self.layout(next.year).locate(0).0;
        next
    }

    /// Checks that `c` names an existing month, day and time of day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonthIndex`],
    /// [`CalendarError::InvalidDay`] or [`CalendarError::InvalidTimeOfDay`].
    pub fn validate_components(&self, c: &TimeComponents) -> Result<(), CalendarError> {
        let month = self.month(c.month).ok_or(CalendarError::InvalidMonthIndex {
            index: c.month,
            count: self.months().len(),
        })?;
        let max = self.days_in_month(c.month, c.year);
        if c.day_of_month >= max {
            return Err(CalendarError::InvalidDay {
                day: c.day_of_month,
                month: month.name.clone(),
                max,
            });
        }
        let units = self.time_units();
        if c.hour >= units.hours_per_day
            || c.minute >= units.minutes_per_hour
            || c.second >= units.seconds_per_minute
        {
            return Err(CalendarError::InvalidTimeOfDay {
                hour: c.hour,
                minute: c.minute,
                second: c.second,
            });
        }
        Ok(())
    }
}

/// Converts between scalar seconds and [`TimeComponents`].
///
/// Scalar time counts seconds from the epoch (internal year 0, month 0,
/// day 0, midnight), shifted by an optional epoch offset.
///
/// # Example
///
/// ```
/// use orrery_calendar::{CalendarBuilder, MonthDefinition, TimeComponents, TimeConverter, WeekdayDefinition};
///
/// let calendar = CalendarBuilder::new("Tens")
///     .with_months([MonthDefinition::new("A", 1, 10), MonthDefinition::new("B", 2, 10)])
///     .with_weekdays([WeekdayDefinition::new("Day")])
///     .build()
///     .unwrap();
/// let converter = TimeConverter::new(&calendar);
///
/// let c = converter.time_to_components(86_400 * 12 + 3_600);
/// assert_eq!(c, TimeComponents::new(0, 1, 2).with_time(1, 0, 0));
/// assert_eq!(converter.components_to_time(&c), 86_400 * 12 + 3_600);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimeConverter<'a> {
    calendar: &'a CalendarDefinition,
    epoch_offset: i64,
}

impl<'a> TimeConverter<'a> {
    /// Creates a converter whose scalar 0 is the epoch.
    pub fn new(calendar: &'a CalendarDefinition) -> Self {
        Self {
            calendar,
            epoch_offset: 0,
        }
    }

    /// Sets the scalar value that corresponds to the epoch.
    pub fn with_epoch_offset(mut self, seconds: i64) -> Self {
        self.epoch_offset = seconds;
        self
    }

    /// The calendar this converter works in.
    pub fn calendar(&self) -> &'a CalendarDefinition {
        self.calendar
    }

    /// Scalar value of the epoch.
    pub fn epoch_offset(&self) -> i64 {
        self.epoch_offset
    }

    /// Splits a scalar time into date and time-of-day components.
    pub fn time_to_components(&self, time: i64) -> TimeComponents {
        let units = self.calendar.time_units();
        let per_day = units.seconds_per_day();
        let per_hour = units.seconds_per_hour();
        let per_minute = i64::from(units.seconds_per_minute);

        let local = time - self.epoch_offset;
        let days = local.div_euclid(per_day);
        let secs = local.rem_euclid(per_day);

        self.calendar.date_from_day_number(days).with_time(
            (secs / per_hour) as u32,
            ((secs % per_hour) / per_minute) as u32,
            (secs % per_minute) as u32,
        )
    }

    /// Joins components back into a scalar time.
    ///
    /// Out-of-range components are not rejected; a month past the end of
    /// the year counts every month of that year, and overflowing days or
    /// times of day simply add up.
    pub fn components_to_time(&self, c: &TimeComponents) -> i64 {
        let units = self.calendar.time_units();
        let day = self.calendar.day_number(c);
        let seconds = i64::from(c.hour) * units.seconds_per_hour()
            + i64::from(c.minute) * i64::from(units.seconds_per_minute)
            + i64::from(c.second);
        day * units.seconds_per_day() + seconds + self.epoch_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{CalendarBuilder, MonthDefinition, TimeUnits, WeekdayDefinition};
    use crate::leap::LeapYearRule;

    fn calendar() -> CalendarDefinition {
        CalendarBuilder::new("Test")
            .with_months([
                MonthDefinition::new("A", 1, 10),
                MonthDefinition::new("Gap", 2, 1).intercalary(),
                MonthDefinition::new("B", 3, 9).with_leap_days(10),
            ])
            .with_weekdays([WeekdayDefinition::new("X"), WeekdayDefinition::new("Y")])
            .with_leap_rule(LeapYearRule::Simple {
                interval: 4,
                start: 0,
            })
            .with_time_units(TimeUnits::new(10, 10, 10))
            .build()
            .unwrap()
    }

    #[test]
    fn days_in_year_follows_leap_rule() {
        let cal = calendar();
        assert_eq!(cal.days_in_year(0), 21);
        assert_eq!(cal.days_in_year(1), 20);
        assert_eq!(cal.days_in_year(-4), 21);
        assert_eq!(cal.days_in_month(2, 4), 10);
        assert_eq!(cal.days_in_month(2, 5), 9);
        assert_eq!(cal.days_in_month(9, 5), 0);
    }

    #[test]
    fn days_before_year_both_directions() {
        let cal = calendar();
        assert_eq!(cal.days_before_year(0), 0);
        assert_eq!(cal.days_before_year(1), 21);
        assert_eq!(cal.days_before_year(4), 21 + 20 * 3);
        assert_eq!(cal.days_before_year(-1), -20);
        assert_eq!(cal.days_before_year(-4), -(20 * 3 + 21));
    }

    #[test]
    fn day_number_roundtrip() {
        let cal = calendar();
        for n in -200..200 {
            let c = cal.date_from_day_number(n);
            assert_eq!(cal.day_number(&c), n, "roundtrip failed for day {n}");
        }
    }

    #[test]
    fn negative_day_lands_in_previous_year() {
        let cal = calendar();
        let c = cal.date_from_day_number(-1);
        assert_eq!(c, TimeComponents::new(-1, 2, 8));
    }

    #[test]
    fn next_day_crosses_months_and_years() {
        let cal = calendar();
        let c = TimeComponents::new(0, 0, 9).with_time(3, 2, 1);
        assert_eq!(cal.next_day(&c), TimeComponents::new(0, 1, 0).with_time(3, 2, 1));
        let end = TimeComponents::new(0, 2, 9);
        assert_eq!(cal.next_day(&end), TimeComponents::new(1, 0, 0));
    }

    #[test]
    fn converter_splits_time_of_day() {
        let cal = calendar();
        let conv = TimeConverter::new(&cal);
        // 10 * 10 * 10 = 1000 seconds per day.
        let c = conv.time_to_components(1000 * 3 + 456);
        assert_eq!(c, TimeComponents::new(0, 0, 3).with_time(4, 5, 6));
    }

    #[test]
    fn converter_handles_negative_time() {
        let cal = calendar();
        let conv = TimeConverter::new(&cal);
        let c = conv.time_to_components(-1);
        assert_eq!(c, TimeComponents::new(-1, 2, 8).with_time(9, 9, 9));
        assert_eq!(conv.components_to_time(&c), -1);
    }

    #[test]
    fn converter_roundtrip_scalar() {
        let cal = calendar();
        let conv = TimeConverter::new(&cal);
        for t in (-50_000..50_000).step_by(997) {
            let c = conv.time_to_components(t);
            assert_eq!(conv.components_to_time(&c), t, "roundtrip failed for t={t}");
        }
    }

    #[test]
    fn epoch_offset_shifts_scalar() {
        let cal = calendar();
        let conv = TimeConverter::new(&cal).with_epoch_offset(500);
        assert_eq!(conv.time_to_components(500), TimeComponents::new(0, 0, 0));
        assert_eq!(conv.components_to_time(&TimeComponents::new(0, 0, 1)), 1500);
    }

    #[test]
    fn validate_components_rejects_out_of_range() {
        let cal = calendar();
        assert!(cal.validate_components(&TimeComponents::new(0, 2, 9)).is_ok());
        assert!(matches!(
            cal.validate_components(&TimeComponents::new(1, 2, 9)),
            Err(CalendarError::InvalidDay { max: 9, .. })
        ));
        assert!(matches!(
            cal.validate_components(&TimeComponents::new(0, 3, 0)),
            Err(CalendarError::InvalidMonthIndex { index: 3, count: 3 })
        ));
        assert!(matches!(
            cal.validate_components(&TimeComponents::new(0, 0, 0).with_time(10, 0, 0)),
            Err(CalendarError::InvalidTimeOfDay { .. })
        ));
    }

    #[test]
    fn components_order_chronologically() {
        let a = TimeComponents::new(0, 1, 5);
        let b = TimeComponents::new(0, 2, 0);
        let c = TimeComponents::new(1, 0, 0).with_time(0, 0, 1);
        assert!(a < b && b < c);
    }
}
