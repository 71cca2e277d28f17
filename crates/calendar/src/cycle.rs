//! Named repeating cycles, such as zodiac years or market weeks.

use crate::definition::CalendarDefinition;
use crate::error::CalendarError;
use crate::time::TimeComponents;

/// The quantity a cycle counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleBasis {
    /// Display year.
    #[default]
    Year,
    /// Year within the current era.
    EraYear,
    /// 0-based month index.
    Month,
    /// 0-based day of month.
    MonthDay,
    /// Days since the epoch.
    Day,
    /// 0-based day of year.
    YearDay,
}

/// One stage of a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleStage {
    /// Display name.
    pub name: String,
}

impl CycleStage {
    /// Creates a stage.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A named cycle of stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleDefinition {
    /// Display name.
    pub name: String,
    /// Units per full cycle, used for the cycle number.
    pub length: u32,
    /// Added to the counted value before any arithmetic.
    pub offset: i64,
    /// What the cycle counts.
    pub based_on: CycleBasis,
    /// Stages in order; the counted value advances one stage per unit.
    pub stages: Vec<CycleStage>,
}

impl CycleDefinition {
    /// Creates a cycle with one stage per name.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        based_on: CycleBasis,
        stages: impl IntoIterator<Item = S>,
    ) -> Self {
        let stages: Vec<CycleStage> = stages.into_iter().map(CycleStage::new).collect();
        Self {
            name: name.into(),
            length: stages.len().max(1) as u32,
            offset: 0,
            based_on,
            stages,
        }
    }

    /// Sets the cycle length.
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Sets the offset.
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), CalendarError> {
        let invalid = |reason: &str| CalendarError::InvalidCycle {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if self.stages.is_empty() {
            return Err(invalid("cycle has no stages"));
        }
        if self.length == 0 {
            return Err(invalid("length must be >= 1"));
        }
        Ok(())
    }
}

/// The stage of one cycle on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleMatch<'a> {
    /// The cycle definition.
    pub cycle: &'a CycleDefinition,
    /// Index into the cycle's stages.
    pub stage_index: usize,
    /// The current stage.
    pub stage: &'a CycleStage,
    /// 1-based count of completed cycles, never below 1.
    pub cycle_number: i64,
}

impl CalendarDefinition {
    /// The value `basis` counts for the date in `c`.
    pub fn cycle_value(&self, basis: CycleBasis, c: &TimeComponents) -> i64 {
        match basis {
            CycleBasis::Year => self.display_year(c.year),
            CycleBasis::EraYear => self
                .era(c)
                .map_or_else(|| self.display_year(c.year), |m| m.year_in_era),
            CycleBasis::Month => c.month as i64,
            CycleBasis::MonthDay => i64::from(c.day_of_month),
            CycleBasis::Day => self.day_number(c),
            CycleBasis::YearDay => i64::from(self.day_of_year(c)),
        }
    }

    /// The stage of every cycle on the date in `c`, in definition order.
    pub fn cycles_at(&self, c: &TimeComponents) -> Vec<CycleMatch<'_>> {
        self.cycles()
            .iter()
            .map(|cycle| {
                let value = self.cycle_value(cycle.based_on, c) + cycle.offset;
                let stage_index = value.rem_euclid(cycle.stages.len() as i64) as usize;
                let cycle_number = (value.div_euclid(i64::from(cycle.length)) + 1).max(1);
                CycleMatch {
                    cycle,
                    stage_index,
                    stage: &cycle.stages[stage_index],
                    cycle_number,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{CalendarBuilder, MonthDefinition, WeekdayDefinition};
    use crate::era::EraDefinition;

    const ANIMALS: [&str; 4] = ["Rat", "Ox", "Tiger", "Hare"];

    fn calendar(cycles: Vec<CycleDefinition>) -> CalendarDefinition {
        CalendarBuilder::new("Cycles")
            .with_months([MonthDefinition::new("A", 1, 10), MonthDefinition::new("B", 2, 10)])
            .with_weekdays([WeekdayDefinition::new("Day")])
            .with_year_zero(100)
            .with_eras([EraDefinition::new("Age", 90)])
            .with_cycles(cycles)
            .build()
            .unwrap()
    }

    #[test]
    fn yearly_cycle_with_offset() {
        let cal = calendar(vec![CycleDefinition::new("Zodiac", CycleBasis::Year, ANIMALS).with_offset(2)]);
        let m = &cal.cycles_at(&TimeComponents::new(0, 0, 0))[0];
        // Display year 100 + 2 = 102.
        assert_eq!(m.stage.name, "Tiger");
        assert_eq!(m.cycle_number, 26);
    }

    #[test]
    fn cycle_number_is_at_least_one() {
        let cal = calendar(vec![CycleDefinition::new("Zodiac", CycleBasis::Year, ANIMALS).with_offset(-200)]);
        let m = &cal.cycles_at(&TimeComponents::new(0, 0, 0))[0];
        assert_eq!(m.stage.name, "Rat");
        assert_eq!(m.cycle_number, 1);
    }

    #[test]
    fn basis_values() {
        let cal = calendar(Vec::new());
        let c = TimeComponents::new(2, 1, 3);
        assert_eq!(cal.cycle_value(CycleBasis::Year, &c), 102);
        assert_eq!(cal.cycle_value(CycleBasis::EraYear, &c), 13);
        assert_eq!(cal.cycle_value(CycleBasis::Month, &c), 1);
        assert_eq!(cal.cycle_value(CycleBasis::MonthDay, &c), 3);
        assert_eq!(cal.cycle_value(CycleBasis::Day, &c), 53);
        assert_eq!(cal.cycle_value(CycleBasis::YearDay, &c), 13);
    }

    #[test]
    fn daily_cycle_handles_negative_days() {
        let cal = calendar(vec![CycleDefinition::new("Market", CycleBasis::Day, ["Fish", "Grain", "Cloth"])]);
        let m = &cal.cycles_at(&TimeComponents::new(-1, 1, 9))[0];
        assert_eq!(m.stage.name, "Cloth");
        assert_eq!(m.stage_index, 2);
    }

    #[test]
    fn empty_cycle_is_rejected() {
        let err = CycleDefinition::new("Void", CycleBasis::Day, Vec::<String>::new()).validate();
        assert!(matches!(err, Err(CalendarError::InvalidCycle { .. })));
    }
}
