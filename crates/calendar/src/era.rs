//! Era lookup by display year.

use tracing::debug;

use crate::definition::CalendarDefinition;
use crate::error::CalendarError;
use crate::time::TimeComponents;

/// A named span of display years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EraDefinition {
    /// Display name.
    pub name: String,
    /// Short name, e.g. "DR".
    pub abbreviation: Option<String>,
    /// First display year of the era.
    pub start_year: i64,
    /// Last display year, inclusive. Open-ended when `None`.
    pub end_year: Option<i64>,
}

impl EraDefinition {
    /// Creates an open-ended era.
    pub fn new(name: impl Into<String>, start_year: i64) -> Self {
        Self {
            name: name.into(),
            abbreviation: None,
            start_year,
            end_year: None,
        }
    }

    /// Sets the abbreviation.
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    /// Sets the last display year.
    pub fn ending(mut self, end_year: i64) -> Self {
        self.end_year = Some(end_year);
        self
    }

    /// Whether the era covers `display_year`.
    pub fn contains(&self, display_year: i64) -> bool {
        display_year >= self.start_year && self.end_year.is_none_or(|end| display_year <= end)
    }

    pub(crate) fn validate(&self) -> Result<(), CalendarError> {
        match self.end_year {
            Some(end) if end < self.start_year => Err(CalendarError::InvalidEra {
                name: self.name.clone(),
                reason: format!("ends in {end}, before it starts in {}", self.start_year),
            }),
            _ => Ok(()),
        }
    }
}

/// The era covering a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraMatch<'a> {
    /// Index into the calendar's eras.
    pub index: usize,
    /// The era definition.
    pub era: &'a EraDefinition,
    /// 1-based year within the era; the display year itself on fallback.
    pub year_in_era: i64,
    /// Whether no era covered the year and the first era was substituted.
    pub fallback: bool,
}

impl CalendarDefinition {
    /// The era covering `display_year`.
    ///
    /// Eras are searched latest start first, so a later era shadows an
    /// earlier open-ended one. When none covers the year, the first-defined
    /// era is returned with `fallback` set. Returns `None` only when the
    /// calendar defines no eras.
    pub fn era_for_year(&self, display_year: i64) -> Option<EraMatch<'_>> {
        let eras = self.eras();
        let first = eras.first()?;
        let hit = self
            .era_order()
            .iter()
            .copied()
            .find(|&i| eras[i].contains(display_year));

        Some(match hit {
            Some(index) => EraMatch {
                index,
                era: &eras[index],
                year_in_era: display_year - eras[index].start_year + 1,
                fallback: false,
            },
            None => {
                debug!(display_year, "no era covers year, falling back to the first era");
                EraMatch {
                    index: 0,
                    era: first,
                    year_in_era: display_year,
                    fallback: true,
                }
            }
        })
    }

    /// The era of the date in `c`.
    pub fn era(&self, c: &TimeComponents) -> Option<EraMatch<'_>> {
        self.era_for_year(self.display_year(c.year))
    }
}
