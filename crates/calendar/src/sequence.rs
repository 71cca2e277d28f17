//! Consecutive day sequences.

use crate::definition::CalendarDefinition;
use crate::time::TimeComponents;

/// Generates `n_days` consecutive dates starting at `start`.
///
/// Every date keeps the time of day of `start`. Month and year boundaries
/// follow the calendar, including leap-only months.
///
/// # Example
///
/// ```
/// use orrery_calendar::{CalendarBuilder, MonthDefinition, TimeComponents, WeekdayDefinition, day_sequence};
///
/// let calendar = CalendarBuilder::new("Short")
///     .with_months([MonthDefinition::new("A", 1, 2), MonthDefinition::new("B", 2, 2)])
///     .with_weekdays([WeekdayDefinition::new("Day")])
///     .build()
///     .unwrap();
/// let dates = day_sequence(&calendar, TimeComponents::new(0, 1, 1), 3);
/// assert_eq!(dates[1], TimeComponents::new(1, 0, 0));
/// ```
pub fn day_sequence(
    calendar: &CalendarDefinition,
    start: TimeComponents,
    n_days: usize,
) -> Vec<TimeComponents> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        current = calendar.next_day(&current);
        dates.push(current);
    }
    dates
}
