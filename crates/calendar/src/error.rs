//! Error types for the orrery-calendar crate.

/// Error type for all fallible operations in the orrery-calendar crate.
///
/// Every variant describes a malformed or self-contradictory calendar
/// definition, or components that do not fit the calendar. Lookups that
/// simply find no match (no era covering a year, no season covering a day)
/// are not errors; the resolvers fall back to documented defaults instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a calendar defines no months at all.
    #[error("calendar defines no months")]
    NoMonths,

    /// Returned when a calendar defines no weekdays.
    #[error("calendar defines no weekdays")]
    NoWeekdays,

    /// Returned when one of the sub-day units is zero.
    #[error(
        "invalid time units: {hours_per_day} h/day, {minutes_per_hour} min/h, \
         {seconds_per_minute} s/min (all must be >= 1)"
    )]
    InvalidTimeUnits {
        /// Hours in one day.
        hours_per_day: u32,
        /// Minutes in one hour.
        minutes_per_hour: u32,
        /// Seconds in one minute.
        seconds_per_minute: u32,
    },

    /// Returned when a regular or leap year would contain no days.
    #[error("{kind} year has no days")]
    EmptyYear {
        /// `"regular"` or `"leap"`.
        kind: &'static str,
    },

    /// Returned when the calendar's first weekday is not a valid weekday index.
    #[error("first weekday {index} out of range (calendar has {count} weekdays)")]
    InvalidFirstWeekday {
        /// The invalid weekday index.
        index: usize,
        /// Number of weekdays defined.
        count: usize,
    },

    /// Returned when a month's starting weekday is not a valid weekday index.
    #[error("month {month:?}: starting weekday {index} out of range (calendar has {count} weekdays)")]
    InvalidStartingWeekday {
        /// Name of the offending month.
        month: String,
        /// The invalid weekday index.
        index: usize,
        /// Number of weekdays defined.
        count: usize,
    },

    /// Returned when a simple leap rule has an interval below 1.
    #[error("invalid leap interval: {interval} (must be >= 1)")]
    InvalidLeapInterval {
        /// The invalid interval.
        interval: i64,
    },

    /// Returned when a custom leap pattern contains a malformed token.
    #[error("invalid leap pattern {pattern:?}: bad token {token:?}")]
    InvalidLeapPattern {
        /// The full pattern string.
        pattern: String,
        /// The token that failed to parse.
        token: String,
    },

    /// Returned when a festival cannot be placed or has an invalid duration.
    #[error("festival {name:?}: {reason}")]
    InvalidFestival {
        /// Festival name.
        name: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a season has no usable date range or duration.
    #[error("season {name:?}: {reason}")]
    InvalidSeason {
        /// Season name.
        name: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a moon has a non-positive cycle or malformed phases.
    #[error("moon {name:?}: {reason}")]
    InvalidMoon {
        /// Moon name.
        name: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an era ends before it starts.
    #[error("era {name:?}: {reason}")]
    InvalidEra {
        /// Era name.
        name: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a cycle has no stages or a zero length.
    #[error("cycle {name:?}: {reason}")]
    InvalidCycle {
        /// Cycle name.
        name: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a climate zone carries invalid chances or ranges.
    #[error("climate zone {id:?}: {reason}")]
    InvalidClimateZone {
        /// Zone identifier.
        id: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a canonical hour lies outside the day.
    #[error("canonical hour {name:?}: {reason}")]
    InvalidCanonicalHour {
        /// Canonical hour name.
        name: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the calendar-wide daylight curve is inconsistent.
    #[error("invalid daylight configuration: {reason}")]
    InvalidDaylight {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a month index does not exist in the calendar.
    #[error("month index {index} out of range (calendar has {count} months)")]
    InvalidMonthIndex {
        /// The invalid 0-based month index.
        index: usize,
        /// Number of months defined.
        count: usize,
    },

    /// Returned when a day does not exist in the given month and year.
    #[error("day {day} out of range for month {month:?} ({max} days)")]
    InvalidDay {
        /// The invalid 0-based day of month.
        day: u32,
        /// Name of the month.
        month: String,
        /// Number of days in the month that year.
        max: u32,
    },

    /// Returned when hour, minute or second exceed the calendar's units.
    #[error("time of day {hour}:{minute}:{second} out of range")]
    InvalidTimeOfDay {
        /// Hour component.
        hour: u32,
        /// Minute component.
        minute: u32,
        /// Second component.
        second: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_no_months() {
        assert_eq!(CalendarError::NoMonths.to_string(), "calendar defines no months");
    }

    #[test]
    fn error_invalid_time_units() {
        let err = CalendarError::InvalidTimeUnits {
            hours_per_day: 0,
            minutes_per_hour: 60,
            seconds_per_minute: 60,
        };
        assert_eq!(
            err.to_string(),
            "invalid time units: 0 h/day, 60 min/h, 60 s/min (all must be >= 1)"
        );
    }

    #[test]
    fn error_empty_year() {
        let err = CalendarError::EmptyYear { kind: "leap" };
        assert_eq!(err.to_string(), "leap year has no days");
    }

    #[test]
    fn error_invalid_leap_pattern() {
        let err = CalendarError::InvalidLeapPattern {
            pattern: "400,x".to_string(),
            token: "x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid leap pattern \"400,x\": bad token \"x\""
        );
    }

    #[test]
    fn error_invalid_moon() {
        let err = CalendarError::InvalidMoon {
            name: "Selune".to_string(),
            reason: "cycle length must be finite and > 0, got 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "moon \"Selune\": cycle length must be finite and > 0, got 0"
        );
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            month: "Hammer".to_string(),
            max: 30,
        };
        assert_eq!(
            err.to_string(),
            "day 30 out of range for month \"Hammer\" (30 days)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone() {
        let err = CalendarError::InvalidLeapInterval { interval: 0 };
        assert_eq!(err.clone(), err);
    }
}
