//! Raw date tokens for external formatters.

use crate::definition::{CalendarDefinition, CanonicalHour};
use crate::time::TimeComponents;

/// Morning or afternoon half of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// First half of the day.
    Am,
    /// Second half of the day.
    Pm,
}

/// Every value a date template may substitute, already resolved.
///
/// Day, day-of-year and week numbers are 1-based here, unlike
/// [`TimeComponents`].
#[derive(Debug, Clone, PartialEq)]
pub struct DateParts<'a> {
    /// Display year.
    pub year: i64,
    /// 0-based month index.
    pub month_index: usize,
    /// Month ordinal as defined.
    pub month_ordinal: u32,
    /// Month name.
    pub month_name: &'a str,
    /// Month abbreviation, if defined.
    pub month_abbreviation: Option<&'a str>,
    /// 1-based day of month.
    pub day: u32,
    /// 1-based day of year.
    pub day_of_year: u32,
    /// Hour of day.
    pub hour: u32,
    /// Hour on a clock of half the day's length.
    pub hour12: u32,
    /// Half of the day.
    pub meridiem: Meridiem,
    /// Minute.
    pub minute: u32,
    /// Second.
    pub second: u32,
    /// Weekday index.
    pub weekday_index: usize,
    /// Weekday name, honouring month overrides.
    pub weekday_name: &'a str,
    /// 1-based week of year.
    pub week: u32,
    /// Era name.
    pub era_name: Option<&'a str>,
    /// Era abbreviation.
    pub era_abbreviation: Option<&'a str>,
    /// Year within the era.
    pub year_in_era: Option<i64>,
    /// Canonical hour name.
    pub canonical_hour: Option<&'a str>,
    /// Season name.
    pub season: Option<&'a str>,
    /// Names of the festivals on this day.
    pub festivals: Vec<&'a str>,
}

impl CalendarDefinition {
    /// The canonical hour covering the hour in `c`, first match wins.
    pub fn canonical_hour(&self, c: &TimeComponents) -> Option<&CanonicalHour> {
        self.canonical_hours().iter().find(|h| h.contains(c.hour))
    }

    /// Resolves every formatting token for `c`.
    ///
    /// Months past the end of the calendar resolve to the last month.
    pub fn date_parts(&self, c: &TimeComponents) -> DateParts<'_> {
        let last = self.months().len() - 1;
        let month = &self.months()[c.month.min(last)];
        let half = (self.time_units().hours_per_day / 2).max(1);
        let (hour12, meridiem) = match c.hour {
            h if h < half => (if h == 0 { half } else { h }, Meridiem::Am),
            h => (if h == half { half } else { h - half }, Meridiem::Pm),
        };
        let era = self.era(c);

        DateParts {
            year: self.display_year(c.year),
            month_index: c.month,
            month_ordinal: month.ordinal,
            month_name: &month.name,
            month_abbreviation: month.abbreviation.as_deref(),
            day: c.day_of_month + 1,
            day_of_year: self.day_of_year(c) + 1,
            hour: c.hour,
            hour12,
            meridiem,
            minute: c.minute,
            second: c.second,
            weekday_index: self.weekday_index(c),
            weekday_name: self.weekday_name(c),
            week: self.week_of_year(c) + 1,
            era_name: era.map(|m| m.era.name.as_str()),
            era_abbreviation: era.and_then(|m| m.era.abbreviation.as_deref()),
            year_in_era: era.map(|m| m.year_in_era),
            canonical_hour: self.canonical_hour(c).map(|h| h.name.as_str()),
            season: self.season(c).map(|m| m.season.name.as_str()),
            festivals: self.festivals_on(c).into_iter().map(|f| f.name.as_str()).collect(),
        }
    }
}
