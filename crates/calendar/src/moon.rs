//! Moon records. Phase computation lives in the `orrery-moon` crate.

use crate::error::CalendarError;

/// Phase names used when a moon defines none.
pub const DEFAULT_PHASE_NAMES: [&str; 8] = [
    "New Moon",
    "Waxing Crescent",
    "First Quarter",
    "Waxing Gibbous",
    "Full Moon",
    "Waning Gibbous",
    "Last Quarter",
    "Waning Crescent",
];

/// Fraction of the cycle covered by a phase, `start..end` in `[0, 1]`.
/// Wraps around when `end < start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseRange {
    /// Start fraction.
    pub start: f64,
    /// End fraction, exclusive.
    pub end: f64,
}

/// One phase of a moon.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseDefinition {
    /// Display name.
    pub name: String,
    /// Name for the first third of the phase.
    pub rising: Option<String>,
    /// Name for the last third of the phase.
    pub fading: Option<String>,
    /// Explicit placement in the cycle.
    pub range: Option<PhaseRange>,
}

impl PhaseDefinition {
    /// Creates a phase without explicit placement.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rising: None,
            fading: None,
            range: None,
        }
    }

    /// Sets the rising sub-phase name.
    pub fn with_rising(mut self, name: impl Into<String>) -> Self {
        self.rising = Some(name.into());
        self
    }

    /// Sets the fading sub-phase name.
    pub fn with_fading(mut self, name: impl Into<String>) -> Self {
        self.fading = Some(name.into());
        self
    }

    /// Places the phase at `start..end` of the cycle.
    pub fn with_range(mut self, start: f64, end: f64) -> Self {
        self.range = Some(PhaseRange { start, end });
        self
    }
}

/// A calendar date given by display year, used to anchor a moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReferenceDate {
    /// Display year.
    pub year: i64,
    /// 0-based month index.
    pub month: usize,
    /// 0-based day of month.
    pub day: u32,
}

impl ReferenceDate {
    /// Creates a reference date.
    pub const fn new(year: i64, month: usize, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// A moon and its phase cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct MoonDefinition {
    /// Display name.
    pub name: String,
    /// Days per cycle.
    pub cycle_length: f64,
    /// Days added to every offset before the phase lookup.
    pub cycle_day_adjust: f64,
    /// Index of the phase the moon is in on the reference date.
    pub reference_phase: usize,
    /// Date on which the moon enters `reference_phase`.
    pub reference_date: ReferenceDate,
    /// Phases in cycle order. Empty means the eight classic phases.
    pub phases: Vec<PhaseDefinition>,
}

impl MoonDefinition {
    /// Creates a moon that is new at display year 0, month 0, day 0.
    pub fn new(name: impl Into<String>, cycle_length: f64) -> Self {
        Self {
            name: name.into(),
            cycle_length,
            cycle_day_adjust: 0.0,
            reference_phase: 0,
            reference_date: ReferenceDate::default(),
            phases: Vec::new(),
        }
    }

    /// Sets the phases.
    pub fn with_phases(mut self, phases: Vec<PhaseDefinition>) -> Self {
        self.phases = phases;
        self
    }

    /// Anchors the moon: it enters `phase` on `date`.
    pub fn with_reference(mut self, date: ReferenceDate, phase: usize) -> Self {
        self.reference_date = date;
        self.reference_phase = phase;
        self
    }

    /// Sets the day adjustment.
    pub fn with_cycle_day_adjust(mut self, days: f64) -> Self {
        self.cycle_day_adjust = days;
        self
    }

    /// Whether every phase carries an explicit range.
    pub fn has_explicit_ranges(&self) -> bool {
        !self.phases.is_empty() && self.phases.iter().all(|p| p.range.is_some())
    }

    pub(crate) fn resolve_defaults(&mut self) {
        if self.phases.is_empty() {
            self.phases = DEFAULT_PHASE_NAMES.iter().map(|&n| PhaseDefinition::new(n)).collect();
        }
    }

    pub(crate) fn validate(&self, month_count: usize) -> Result<(), CalendarError> {
        let invalid = |reason: String| CalendarError::InvalidMoon {
            name: self.name.clone(),
            reason,
        };
        if !self.cycle_length.is_finite() || self.cycle_length <= 0.0 {
            return Err(invalid(format!(
                "cycle length must be finite and > 0, got {}",
                self.cycle_length
            )));
        }
        if !self.cycle_day_adjust.is_finite() {
            return Err(invalid("cycle day adjustment is not finite".to_string()));
        }
        if self.reference_phase >= self.phases.len() {
            return Err(invalid(format!(
                "reference phase {} out of range ({} phases)",
                self.reference_phase,
                self.phases.len()
            )));
        }
        if self.reference_date.month >= month_count {
            return Err(invalid(format!(
                "reference month {} out of range",
                self.reference_date.month
            )));
        }
        for phase in &self.phases {
            if let Some(r) = phase.range {
                let unit = 0.0..=1.0;
                if !unit.contains(&r.start) || !unit.contains(&r.end) {
                    return Err(invalid(format!(
                        "phase {:?} range {}..{} outside [0, 1]",
                        phase.name, r.start, r.end
                    )));
                }
            }
        }
        Ok(())
    }
}
