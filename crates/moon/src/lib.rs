//! # orrery-moon
//!
//! Moon phase engine for orrery calendars.
//!
//! A moon's cycle is laid out on whole days once per lookup: explicit
//! phase ranges are rounded to day boundaries, otherwise the cycle is
//! split with shorter primary phases (new and full). The day offset from
//! the moon's reference date is wrapped into the cycle and shifted by the
//! reference phase's start.
//!
//! ## Quick Start
//!
//! ```
//! use orrery_calendar::{CalendarBuilder, MoonDefinition, MonthDefinition, TimeComponents, WeekdayDefinition};
//! use orrery_moon::{SubPhase, moon_phase};
//!
//! let calendar = CalendarBuilder::new("Lunar")
//!     .with_months((1..=12).map(|i| MonthDefinition::new(format!("M{i}"), i, 30)))
//!     .with_weekdays((1..=7).map(|i| WeekdayDefinition::new(format!("D{i}"))))
//!     .with_moons([MoonDefinition::new("Luna", 29.0)])
//!     .build()
//!     .unwrap();
//!
//! let moon = &calendar.moons()[0];
//! let phase = moon_phase(&calendar, moon, &TimeComponents::new(0, 0, 16));
//! assert_eq!(phase.phase(moon).name, "Full Moon");
//! assert_eq!(phase.sub_phase, SubPhase::Peak);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `spans` | Whole-day phase placement |
//! | `phase` | Phase lookup, sub-phases, days until a phase |

mod phase;
mod spans;

pub use phase::{
    MoonPhase, SubPhase, days_since_reference, days_until_phase, moon_phase, moon_phases, phase_at,
};
pub use spans::{PhaseSpan, cycle_days, phase_spans};
