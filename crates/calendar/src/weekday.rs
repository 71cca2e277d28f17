//! Weekday and week-number resolution.
//!
//! Festivals that skip the weekday cycle and every day of an intercalary
//! month are "non-counting": they take the weekday of the next counting
//! day and do not advance the cycle. Per-year totals come from the
//! precomputed [`YearLayout`](crate::layout::YearLayout)s, so only the
//! partial current year is counted per call.

use crate::definition::{CalendarDefinition, WeekdayDefinition};
use crate::time::TimeComponents;

impl CalendarDefinition {
    /// Non-counting days between the epoch and the start of `year`.
    fn non_counting_before_year(&self, year: i32) -> i64 {
        self.sum_years(year, |layout| layout.non_counting_total())
    }

    /// Weekday index of the date in `c`, in `0..weekday_count()`.
    ///
    /// A month with a starting weekday restarts the cycle at its first day;
    /// otherwise the count runs from the epoch's first weekday.
    pub fn weekday_index(&self, c: &TimeComponents) -> usize {
        let n = self.weekday_count() as i64;
        let layout = self.layout(c.year);
        let doy = self.day_of_year(c);

        if let Some(start) = self.month(c.month).and_then(|m| m.starting_weekday) {
            let skipped = layout.non_counting_between(layout.month_start(c.month), doy);
            let offset = start as i64 + i64::from(c.day_of_month) - i64::from(skipped);
            return offset.rem_euclid(n) as usize;
        }

        let counting = self.day_number(c)
            - self.non_counting_before_year(c.year)
            - i64::from(layout.non_counting_before(doy));
        (counting + self.first_weekday() as i64).rem_euclid(n) as usize
    }

    /// Weekday definition of the date in `c`.
    pub fn weekday(&self, c: &TimeComponents) -> &WeekdayDefinition {
        &self.weekdays()[self.weekday_index(c)]
    }

    /// Weekday name of the date in `c`, using the month's own weekday
    /// names when it defines them.
    pub fn weekday_name(&self, c: &TimeComponents) -> &str {
        let index = self.weekday_index(c);
        self.month(c.month)
            .and_then(|m| m.weekday_names.as_ref())
            .and_then(|names| names.get(index))
            .map_or(self.weekdays()[index].name.as_str(), String::as_str)
    }

    /// 0-based week of the year containing the date in `c`.
    ///
    /// Weeks start on weekday 0. Non-counting days belong to the week of
    /// the next counting day.
    pub fn week_of_year(&self, c: &TimeComponents) -> u32 {
        let layout = self.layout(c.year);
        let doy = self.day_of_year(c);
        let counting_doy = doy - layout.non_counting_before(doy);
        let first = self.weekday_index(&TimeComponents::new(c.year, 0, 0)) as u32;
        (counting_doy + first) / self.weekday_count() as u32
    }
}
