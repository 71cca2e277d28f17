//! Season resolution in dated and periodic modes.

use std::ops::Range;

use tracing::debug;

use crate::climate::ClimateProfile;
use crate::definition::{CalendarDefinition, MonthDay, MonthDefinition};
use crate::error::CalendarError;
use crate::time::TimeComponents;

/// How seasons are placed in the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeasonMode {
    /// Each season spans an explicit month/day range.
    #[default]
    Dated,
    /// Seasons follow each other by duration, starting `offset` days into
    /// the year and wrapping around.
    Periodic {
        /// Day of year on which the first season starts.
        offset: u32,
    },
}

/// One season.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeasonDefinition {
    /// Display name.
    pub name: String,
    /// Short name for compact formats.
    pub abbreviation: Option<String>,
    /// First day, inclusive (dated mode).
    pub start: Option<MonthDay>,
    /// Last day, inclusive (dated mode).
    pub end: Option<MonthDay>,
    /// Length in days (periodic mode). Missing durations share the days
    /// left over by the others equally.
    pub duration: Option<u32>,
    /// Weather tendencies.
    pub climate: Option<ClimateProfile>,
}

impl SeasonDefinition {
    /// Creates a dated season spanning `start..=end`.
    pub fn dated(name: impl Into<String>, start: MonthDay, end: MonthDay) -> Self {
        Self {
            name: name.into(),
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    /// Creates a periodic season; `None` takes an equal share of the year.
    pub fn periodic(name: impl Into<String>, duration: Option<u32>) -> Self {
        Self {
            name: name.into(),
            duration,
            ..Self::default()
        }
    }

    /// Sets the abbreviation.
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    /// Sets the climate profile.
    pub fn with_climate(mut self, climate: ClimateProfile) -> Self {
        self.climate = Some(climate);
        self
    }

    fn contains_date(&self, month: usize, day: u32) -> bool {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return false;
        };
        let date = MonthDay::new(month, day);
        if start <= end {
            start <= date && date <= end
        } else {
            date >= start || date <= end
        }
    }
}

/// The seasons of a calendar and how they are placed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeasonSet {
    /// Placement mode shared by all seasons.
    pub mode: SeasonMode,
    /// Seasons in order.
    pub seasons: Vec<SeasonDefinition>,
}

impl SeasonSet {
    /// Dated seasons.
    pub fn dated(seasons: impl IntoIterator<Item = SeasonDefinition>) -> Self {
        Self {
            mode: SeasonMode::Dated,
            seasons: seasons.into_iter().collect(),
        }
    }

    /// Periodic seasons starting `offset` days into the year.
    pub fn periodic(offset: u32, seasons: impl IntoIterator<Item = SeasonDefinition>) -> Self {
        Self {
            mode: SeasonMode::Periodic { offset },
            seasons: seasons.into_iter().collect(),
        }
    }

    /// Number of seasons.
    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    /// Whether no seasons are defined.
    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }

    /// Season by name.
    pub fn get(&self, name: &str) -> Option<&SeasonDefinition> {
        self.seasons.iter().find(|s| s.name == name)
    }

    /// Cycle positions covered by each season in a year of `days` days.
    ///
    /// Bounds are relative to the season offset. Fractional shares are
    /// accumulated and floored so the bounds stay contiguous.
    fn periodic_spans(&self, days: u32) -> Vec<Range<u32>> {
        let explicit: u32 = self.seasons.iter().filter_map(|s| s.duration).sum();
        let missing = self.seasons.iter().filter(|s| s.duration.is_none()).count();
        let share = if missing == 0 {
            0.0
        } else {
            f64::from(days.saturating_sub(explicit)) / missing as f64
        };

        let mut cumulative = 0.0f64;
        self.seasons
            .iter()
            .map(|s| {
                let start = cumulative.floor() as u32;
                cumulative += s.duration.map_or(share, f64::from);
                start..cumulative.floor() as u32
            })
            .collect()
    }

    pub(crate) fn validate(&self, months: &[MonthDefinition]) -> Result<(), CalendarError> {
        for season in &self.seasons {
            let invalid = |reason: String| CalendarError::InvalidSeason {
                name: season.name.clone(),
                reason,
            };
            if let Some(climate) = &season.climate {
                climate.check().map_err(invalid)?;
            }
            match self.mode {
                SeasonMode::Dated => {
                    let (Some(start), Some(end)) = (season.start, season.end) else {
                        return Err(invalid("dated season needs a start and an end".to_string()));
                    };
                    for date in [start, end] {
                        let Some(month) = months.get(date.month) else {
                            return Err(invalid(format!("month index {} out of range", date.month)));
                        };
                        if date.day >= month.days_in(false).max(month.days_in(true)) {
                            return Err(invalid(format!(
                                "day {} out of range for month {:?}",
                                date.day, month.name
                            )));
                        }
                    }
                }
                SeasonMode::Periodic { .. } => {
                    if season.duration == Some(0) {
                        return Err(invalid("duration must be >= 1".to_string()));
                    }
                }
            }
        }
        Ok(())
    }
}

/// The season in effect on a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonMatch<'a> {
    /// Index into the calendar's seasons.
    pub index: usize,
    /// The season definition.
    pub season: &'a SeasonDefinition,
    /// Whether no season matched and the first season was substituted.
    pub fallback: bool,
}

impl CalendarDefinition {
    /// The season in effect on the date in `c`.
    ///
    /// The first matching season wins. When none matches, the first
    /// season is returned with `fallback` set. Returns `None` only when
    /// the calendar defines no seasons.
    pub fn season(&self, c: &TimeComponents) -> Option<SeasonMatch<'_>> {
        let set = self.seasons();
        let first = set.seasons.first()?;

        let found = match set.mode {
            SeasonMode::Dated => set
                .seasons
                .iter()
                .position(|s| s.contains_date(c.month, c.day_of_month)),
            SeasonMode::Periodic { offset } => {
                // Positions wrap over the whole year; days past the last
                // season's end belong to no season.
                let days = self.days_in_year(c.year);
                let pos = (i64::from(self.day_of_year(c)) - i64::from(offset))
                    .rem_euclid(i64::from(days.max(1))) as u32;
                set.periodic_spans(days)
                    .iter()
                    .position(|r| r.contains(&pos))
            }
        };

        Some(match found {
            Some(index) => SeasonMatch {
                index,
                season: &set.seasons[index],
                fallback: false,
            },
            None => {
                debug!(
                    year = c.year,
                    month = c.month,
                    day = c.day_of_month,
                    "no season matched, falling back to the first season"
                );
                SeasonMatch {
                    index: 0,
                    season: first,
                    fallback: true,
                }
            }
        })
    }

    /// Days of year covered by each periodic season in internal year
    /// `year`, in season order.
    ///
    /// Ranges may extend past the year's length when the offset pushes a
    /// season across the year boundary. Returns `None` in dated mode.
    pub fn season_bounds(&self, year: i32) -> Option<Vec<Range<u32>>> {
        let set = self.seasons();
        let SeasonMode::Periodic { offset } = set.mode else {
            return None;
        };
        Some(
            set.periodic_spans(self.days_in_year(year))
                .into_iter()
                .map(|r| r.start + offset..r.end + offset)
                .collect(),
        )
    }
}
