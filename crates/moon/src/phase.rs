//! Phase lookup for a moon at a day offset.

use orrery_calendar::{CalendarDefinition, MoonDefinition, PhaseDefinition, TimeComponents};
use tracing::debug;

use crate::spans::{PhaseSpan, cycle_days, phase_spans};

/// Which third of its phase the moon is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubPhase {
    /// First third.
    Rising,
    /// Middle third, or the whole phase when it is shorter than three days.
    Peak,
    /// Last third.
    Fading,
}

/// A moon's phase on one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhase {
    /// Index into the moon's phases.
    pub phase_index: usize,
    /// Position within the phase.
    pub sub_phase: SubPhase,
    /// Fraction of the cycle elapsed, in `[0, 1)`.
    pub position: f64,
    /// Days elapsed in the current cycle, in `[0, cycle_length)`.
    pub day_in_cycle: f64,
}

impl MoonPhase {
    /// The phase definition.
    pub fn phase<'a>(&self, moon: &'a MoonDefinition) -> &'a PhaseDefinition {
        &moon.phases[self.phase_index]
    }

    /// Descriptive name of the sub-phase.
    ///
    /// A phase's own `rising` or `fading` name wins over the generated
    /// "Rising …" / "Fading …" form.
    pub fn sub_phase_name(&self, moon: &MoonDefinition) -> String {
        let phase = self.phase(moon);
        match self.sub_phase {
            SubPhase::Rising => phase
                .rising
                .clone()
                .unwrap_or_else(|| format!("Rising {}", phase.name)),
            SubPhase::Peak => phase.name.clone(),
            SubPhase::Fading => phase
                .fading
                .clone()
                .unwrap_or_else(|| format!("Fading {}", phase.name)),
        }
    }
}

/// Finds the span covering `day`, or the closest span starting before it.
fn locate(spans: &[PhaseSpan], day: u32) -> usize {
    if let Some(i) = spans.iter().position(|s| !s.is_empty() && s.contains(day)) {
        return i;
    }
    debug!(day, "no phase covers day, using the closest preceding phase");
    let preceding = spans
        .iter()
        .enumerate()
        .filter(|(_, s)| s.start <= day)
        .max_by_key(|(_, s)| s.start);
    preceding
        .or_else(|| spans.iter().enumerate().max_by_key(|(_, s)| s.start))
        .map_or(0, |(i, _)| i)
}

/// The phase of `moon` `days` days after its reference date.
///
/// `days` may be negative or fractional. The offset is wrapped into one
/// cycle, shifted by the reference phase's start and the moon's day
/// adjustment, then wrapped again.
pub fn phase_at(moon: &MoonDefinition, days: f64) -> MoonPhase {
    let length = moon.cycle_length;
    let total = cycle_days(moon);
    let spans = phase_spans(moon);
    let reference_start = spans
        .get(moon.reference_phase)
        .map_or(0.0, |s| f64::from(s.start));

    let mut day_in_cycle =
        (days.rem_euclid(length) + reference_start + moon.cycle_day_adjust).rem_euclid(length);
    if day_in_cycle >= length {
        day_in_cycle = 0.0;
    }
    let day = (day_in_cycle.floor() as u32).min(total - 1);

    let phase_index = locate(&spans, day);
    let sub_phase = match spans.get(phase_index) {
        Some(span) => {
            let len = span.len(total);
            let third = len / 3;
            let offset = span.offset_of(day, total);
            if third == 0 {
                SubPhase::Peak
            } else if offset < third {
                SubPhase::Rising
            } else if offset >= len - third {
                SubPhase::Fading
            } else {
                SubPhase::Peak
            }
        }
        None => SubPhase::Peak,
    };

    MoonPhase {
        phase_index,
        sub_phase,
        position: day_in_cycle / length,
        day_in_cycle,
    }
}

/// Whole days from the moon's reference date to the date in `c`.
pub fn days_since_reference(
    calendar: &CalendarDefinition,
    moon: &MoonDefinition,
    c: &TimeComponents,
) -> i64 {
    let r = moon.reference_date;
    let reference = TimeComponents::new(calendar.internal_year(r.year), r.month, r.day);
    calendar.day_number(c) - calendar.day_number(&reference)
}

/// The phase of `moon` on the date in `c`.
pub fn moon_phase(calendar: &CalendarDefinition, moon: &MoonDefinition, c: &TimeComponents) -> MoonPhase {
    phase_at(moon, days_since_reference(calendar, moon, c) as f64)
}

/// The phase of every moon of the calendar on the date in `c`.
pub fn moon_phases<'a>(
    calendar: &'a CalendarDefinition,
    c: &TimeComponents,
) -> Vec<(&'a MoonDefinition, MoonPhase)> {
    calendar
        .moons()
        .iter()
        .map(|moon| (moon, moon_phase(calendar, moon, c)))
        .collect()
}

/// Whole days from `days` until `moon` next enters phase `phase_index`.
///
/// Returns `Some(0)` if the moon is already in that phase, and `None` if
/// the phase does not exist or never occurs.
pub fn days_until_phase(moon: &MoonDefinition, days: f64, phase_index: usize) -> Option<u32> {
    if phase_index >= moon.phases.len() {
        return None;
    }
    (0..=cycle_days(moon)).find(|&k| phase_at(moon, days + f64::from(k)).phase_index == phase_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use orrery_calendar::{DEFAULT_PHASE_NAMES, ReferenceDate};

    fn luna(cycle: f64) -> MoonDefinition {
        MoonDefinition::new("Luna", cycle).with_phases(
            DEFAULT_PHASE_NAMES
                .iter()
                .map(|&n| PhaseDefinition::new(n))
                .collect(),
        )
    }

    #[test]
    fn new_at_zero_full_mid_cycle() {
        let moon = luna(29.0);
        assert_eq!(phase_at(&moon, 0.0).phase_index, 0);
        assert_eq!(phase_at(&moon, 14.0).phase_index, 3);
        assert_eq!(phase_at(&moon, 15.0).phase_index, 4);
        assert_eq!(phase_at(&moon, 28.0).phase_index, 7);
    }

    #[test]
    fn negative_days_wrap() {
        let moon = luna(29.0);
        assert_eq!(phase_at(&moon, -1.0).phase_index, 7);
        assert_relative_eq!(phase_at(&moon, -1.0).day_in_cycle, 28.0);
    }

    #[test]
    fn position_is_fraction_of_cycle() {
        let moon = luna(30.0);
        let p = phase_at(&moon, 45.0);
        assert_relative_eq!(p.position, 0.5);
        assert_relative_eq!(p.day_in_cycle, 15.0);
        assert!(p.position < 1.0);
    }

    #[test]
    fn reference_phase_shifts_cycle() {
        let moon = luna(29.0).with_reference(ReferenceDate::new(0, 0, 0), 4);
        assert_eq!(phase_at(&moon, 0.0).phase_index, 4);
        assert_eq!(phase_at(&moon, 14.0).phase_index, 0);
    }

    #[test]
    fn day_adjust_shifts_cycle() {
        let moon = luna(29.0).with_cycle_day_adjust(-1.0);
        assert_eq!(phase_at(&moon, 0.0).phase_index, 7);
        assert_eq!(phase_at(&moon, 1.0).phase_index, 0);
    }

    #[test]
    fn sub_phases_by_thirds() {
        let moon = MoonDefinition::new("Slow", 9.0)
            .with_phases(vec![PhaseDefinition::new("Whole").with_range(0.0, 1.0).with_fading("Waning")]);
        let sub = |d| phase_at(&moon, d).sub_phase;
        assert_eq!(sub(0.0), SubPhase::Rising);
        assert_eq!(sub(2.0), SubPhase::Rising);
        assert_eq!(sub(3.0), SubPhase::Peak);
        assert_eq!(sub(6.0), SubPhase::Fading);
        assert_eq!(phase_at(&moon, 0.0).sub_phase_name(&moon), "Rising Whole");
        assert_eq!(phase_at(&moon, 4.0).sub_phase_name(&moon), "Whole");
        assert_eq!(phase_at(&moon, 8.0).sub_phase_name(&moon), "Waning");
    }

    #[test]
    fn short_phase_is_peak() {
        let moon = luna(8.0);
        for d in 0..8 {
            assert_eq!(phase_at(&moon, f64::from(d)).sub_phase, SubPhase::Peak);
        }
    }

    #[test]
    fn uncovered_day_uses_preceding_phase() {
        let moon = MoonDefinition::new("Gappy", 10.0).with_phases(vec![
            PhaseDefinition::new("A").with_range(0.0, 0.3),
            PhaseDefinition::new("B").with_range(0.5, 0.8),
        ]);
        assert_eq!(phase_at(&moon, 4.0).phase_index, 0);
        assert_eq!(phase_at(&moon, 9.0).phase_index, 1);
    }

    #[test]
    fn days_until_full_moon() {
        let moon = luna(29.0);
        assert_eq!(days_until_phase(&moon, 0.0, 4), Some(15));
        assert_eq!(days_until_phase(&moon, 16.0, 4), Some(0));
        assert_eq!(days_until_phase(&moon, 18.0, 4), Some(26));
        assert_eq!(days_until_phase(&moon, 0.0, 8), None);
    }
}
