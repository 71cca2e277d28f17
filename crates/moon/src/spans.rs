//! Whole-day placement of phases within a moon's cycle.

use orrery_calendar::MoonDefinition;

/// Days `start..end` of the cycle covered by one phase.
///
/// `end < start` means the span wraps past the end of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSpan {
    /// First day, inclusive.
    pub start: u32,
    /// Last day, exclusive.
    pub end: u32,
}

impl PhaseSpan {
    /// Number of days covered in a cycle of `cycle_days` days.
    pub fn len(&self, cycle_days: u32) -> u32 {
        if self.end >= self.start {
            self.end - self.start
        } else {
            cycle_days - self.start + self.end
        }
    }

    /// Whether the span covers no days.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `day` falls inside the span.
    pub fn contains(&self, day: u32) -> bool {
        if self.start <= self.end {
            (self.start..self.end).contains(&day)
        } else {
            day >= self.start || day < self.end
        }
    }

    /// Days from the span's start to `day`, wrapping.
    pub fn offset_of(&self, day: u32, cycle_days: u32) -> u32 {
        if day >= self.start {
            day - self.start
        } else {
            cycle_days - self.start + day
        }
    }
}

/// Whole days in one cycle.
pub fn cycle_days(moon: &MoonDefinition) -> u32 {
    (moon.cycle_length.ceil() as u32).max(1)
}

/// Places every phase of `moon` on whole days.
///
/// Explicit ranges are rounded to the nearest day. Without explicit
/// ranges the cycle is split so the primary phases (the first one and,
/// for an even count, the one halfway round) get `floor(days / n)` days
/// each and the others share the rest, the remainder going to the
/// earliest of them.
pub fn phase_spans(moon: &MoonDefinition) -> Vec<PhaseSpan> {
    let days = cycle_days(moon);
    if moon.has_explicit_ranges() {
        let to_day = |fraction: f64| ((fraction * moon.cycle_length).round() as u32).min(days);
        return moon
            .phases
            .iter()
            .filter_map(|p| p.range)
            .map(|r| {
                let (start, end) = (to_day(r.start), to_day(r.end));
                // A range that rounds to nothing stays empty, even at the
                // cycle's end.
                if start == end {
                    PhaseSpan { start, end }
                } else {
                    PhaseSpan {
                        start: start % days,
                        end,
                    }
                }
            })
            .collect();
    }
    even_split(moon.phases.len(), days)
}

fn even_split(n: usize, days: u32) -> Vec<PhaseSpan> {
    if n == 0 {
        return Vec::new();
    }
    let is_primary = |i: usize| i == 0 || (n % 2 == 0 && i == n / 2);
    let primary_count = (0..n).filter(|&i| is_primary(i)).count() as u32;
    let other_count = n as u32 - primary_count;

    let primary_len = days / n as u32;
    let rest = days - primary_len * primary_count;
    let (other_len, mut remainder) = if other_count == 0 {
        (0, rest)
    } else {
        (rest / other_count, rest % other_count)
    };

    let mut spans = Vec::with_capacity(n);
    let mut start = 0u32;
    for i in 0..n {
        let primary = is_primary(i);
        let mut len = if primary { primary_len } else { other_len };
        // Leftover days go to the earliest phases that share them.
        if remainder > 0 && (primary == (other_count == 0)) {
            len += 1;
            remainder -= 1;
        }
        spans.push(PhaseSpan {
            start,
            end: start + len,
        });
        start += len;
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_calendar::PhaseDefinition;

    fn default_moon(cycle: f64) -> MoonDefinition {
        let mut moon = MoonDefinition::new("Luna", cycle);
        moon.phases = orrery_calendar::DEFAULT_PHASE_NAMES
            .iter()
            .map(|&n| PhaseDefinition::new(n))
            .collect();
        moon
    }

    fn lengths(spans: &[PhaseSpan], days: u32) -> Vec<u32> {
        spans.iter().map(|s| s.len(days)).collect()
    }

    #[test]
    fn twenty_nine_day_split() {
        let spans = phase_spans(&default_moon(29.0));
        assert_eq!(lengths(&spans, 29), vec![3, 4, 4, 4, 3, 4, 4, 3]);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[4].start, 15);
        assert_eq!(spans[7].end, 29);
    }

    #[test]
    fn split_covers_whole_cycle() {
        for cycle in [8.0, 12.5, 28.0, 29.53, 30.4375, 100.0] {
            let moon = default_moon(cycle);
            let days = cycle_days(&moon);
            let spans = phase_spans(&moon);
            assert_eq!(lengths(&spans, days).iter().sum::<u32>(), days, "cycle {cycle}");
            for w in spans.windows(2) {
                assert_eq!(w[0].end, w[1].start);
            }
        }
    }

    #[test]
    fn odd_phase_count_has_one_primary() {
        let spans = even_split(3, 10);
        // Primary gets 3, the other two share 7.
        assert_eq!(lengths(&spans, 10), vec![3, 4, 3]);
    }

    #[test]
    fn only_primaries_take_remainder() {
        let spans = even_split(2, 9);
        assert_eq!(lengths(&spans, 9), vec![5, 4]);
    }

    #[test]
    fn explicit_ranges_round_and_wrap() {
        let moon = MoonDefinition::new("Odd", 10.0).with_phases(vec![
            PhaseDefinition::new("Dark").with_range(0.95, 0.14),
            PhaseDefinition::new("Light").with_range(0.14, 0.95),
        ]);
        let spans = phase_spans(&moon);
        assert_eq!(spans[0], PhaseSpan { start: 0, end: 1 });
        assert_eq!(spans[1], PhaseSpan { start: 1, end: 10 });

        let wrapping = PhaseSpan { start: 8, end: 2 };
        assert!(wrapping.contains(9));
        assert!(wrapping.contains(1));
        assert!(!wrapping.contains(5));
        assert_eq!(wrapping.len(10), 4);
        assert_eq!(wrapping.offset_of(1, 10), 3);
    }

    #[test]
    fn range_rounding_to_cycle_end_is_empty() {
        let moon = MoonDefinition::new("Tailed", 10.0).with_phases(vec![
            PhaseDefinition::new("Tail").with_range(0.95, 1.0),
            PhaseDefinition::new("Waxing").with_range(0.0, 0.5),
            PhaseDefinition::new("Waning").with_range(0.5, 0.95),
        ]);
        let spans = phase_spans(&moon);
        assert!(spans[0].is_empty());
        assert_eq!(spans[0].len(10), 0);
        assert!((0..10).all(|d| !spans[0].contains(d)));
        assert_eq!(spans[1], PhaseSpan { start: 0, end: 5 });
        assert_eq!(spans[2], PhaseSpan { start: 5, end: 10 });

        let full = MoonDefinition::new("Whole", 10.0)
            .with_phases(vec![PhaseDefinition::new("Always").with_range(0.0, 1.0)]);
        assert_eq!(phase_spans(&full), vec![PhaseSpan { start: 0, end: 10 }]);
    }
}
