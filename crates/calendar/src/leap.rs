//! Leap-year rules and the interval voting evaluator.
//!
//! Every rule is reduced to a list of [`LeapInterval`]s. Each interval
//! votes on a year: `+1` when the year is divisible and the interval adds
//! leap years, `-1` when it is divisible and the interval subtracts them,
//! `0` otherwise. A year is a leap year when the votes sum to more than
//! zero, so the Gregorian pattern `400, !100, 4` resolves 2000 as leap
//! (400 cancels the veto from 100) and 1900 as common.

use crate::error::CalendarError;

/// One divisibility test inside a leap-year rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeapInterval {
    /// Divisor. Intervals below 1 never vote.
    pub every: i64,
    /// A divisible year is vetoed instead of allowed.
    pub subtracts: bool,
    /// Anchor the interval at year 0 instead of the rule's start year.
    pub ignores_offset: bool,
}

impl LeapInterval {
    /// Creates an adding interval anchored at the rule's start year.
    pub const fn every(every: i64) -> Self {
        Self {
            every,
            subtracts: false,
            ignores_offset: false,
        }
    }

    /// Creates a subtracting interval anchored at the rule's start year.
    pub const fn except(every: i64) -> Self {
        Self {
            every,
            subtracts: true,
            ignores_offset: false,
        }
    }

    fn vote(self, year: i64, start: i64) -> i32 {
        if self.every < 1 {
            return 0;
        }
        let offset = if self.ignores_offset { 0 } else { start };
        if (year - offset).rem_euclid(self.every) != 0 {
            return 0;
        }
        if self.subtracts { -1 } else { 1 }
    }
}

const GREGORIAN: [LeapInterval; 3] = [
    LeapInterval::every(400),
    LeapInterval::except(100),
    LeapInterval::every(4),
];

/// How a calendar decides which years are leap years.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LeapYearRule {
    /// No leap years.
    #[default]
    None,
    /// Every `interval` years, counted from `start`.
    Simple {
        /// Years between leap years.
        interval: i64,
        /// Display year of a leap year.
        start: i64,
    },
    /// The fixed pattern `400, !100, 4`.
    Gregorian,
    /// A parsed custom interval pattern, see [`LeapYearRule::custom`].
    Custom {
        /// Parsed intervals in pattern order.
        intervals: Vec<LeapInterval>,
        /// Anchor year for intervals that do not ignore the offset.
        start: i64,
    },
}

impl LeapYearRule {
    /// Parses a custom pattern such as `"400,!100,4"` or `"+7,!35"`.
    ///
    /// Tokens are separated by commas. A leading `!` marks a subtracting
    /// interval and a leading `+` anchors the interval at year 0 instead
    /// of `start`. Both markers may be combined.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidLeapPattern`] if a token is not an
    /// integer >= 1, or if the pattern contains no intervals.
    pub fn custom(pattern: &str, start: i64) -> Result<Self, CalendarError> {
        let intervals = parse_leap_pattern(pattern)?;
        Ok(Self::Custom { intervals, start })
    }

    /// Evaluates the rule for a display year.
    ///
    /// When the calendar has no year zero, negative years are shifted by one
    /// before the divisibility tests so the sequence stays continuous across
    /// the missing year.
    pub fn is_leap_year(&self, display_year: i64, year_zero_exists: bool) -> bool {
        let year = if !year_zero_exists && display_year < 0 {
            display_year + 1
        } else {
            display_year
        };
        let (intervals, start): (&[LeapInterval], i64) = match self {
            Self::None => return false,
            Self::Simple { interval, start } => {
                if *interval < 1 {
                    return false;
                }
                return (year - start).rem_euclid(*interval) == 0;
            }
            Self::Gregorian => (GREGORIAN.as_slice(), 0),
            Self::Custom { intervals, start } => (intervals.as_slice(), *start),
        };
        intervals.iter().map(|i| i.vote(year, start)).sum::<i32>() > 0
    }

    pub(crate) fn validate(&self) -> Result<(), CalendarError> {
        if let Self::Simple { interval, .. } = self {
            if *interval < 1 {
                return Err(CalendarError::InvalidLeapInterval {
                    interval: *interval,
                });
            }
        }
        Ok(())
    }
}

/// Parses a comma-separated leap pattern into intervals.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidLeapPattern`] on the first malformed
/// token, or with an empty token if nothing could be parsed.
pub fn parse_leap_pattern(pattern: &str) -> Result<Vec<LeapInterval>, CalendarError> {
    let bad = |token: &str| CalendarError::InvalidLeapPattern {
        pattern: pattern.to_string(),
        token: token.to_string(),
    };

    let mut intervals = Vec::new();
    for raw in pattern.split(',') {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        let mut subtracts = false;
        let mut ignores_offset = false;
        let mut digits = token;
        loop {
            if let Some(rest) = digits.strip_prefix('!') {
                subtracts = true;
                digits = rest;
            } else if let Some(rest) = digits.strip_prefix('+') {
                ignores_offset = true;
                digits = rest;
            } else {
                break;
            }
        }
        let every: i64 = digits.trim().parse().map_err(|_| bad(token))?;
        if every < 1 {
            return Err(bad(token));
        }
        intervals.push(LeapInterval {
            every,
            subtracts,
            ignores_offset,
        });
    }

    if intervals.is_empty() {
        return Err(bad(""));
    }
    Ok(intervals)
}
