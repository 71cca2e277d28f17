//! # orrery-calendar
//!
//! Definitions and date arithmetic for configurable fictional calendars.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CalendarBuilder"] -->|".build()"| B["CalendarDefinition"]
//!     B --> L["YearLayout (regular, leap)"]
//!     T["i64 seconds"] -->|"TimeConverter"| C["TimeComponents"]
//!     C -->|"TimeConverter"| T
//!     C -->|"weekday_index()"| W["weekday"]
//!     C -->|"season()"| S["SeasonMatch"]
//!     C -->|"era()"| E["EraMatch"]
//!     C -->|"cycles_at()"| Y["CycleMatch"]
//!     C -->|"date_parts()"| P["DateParts"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use orrery_calendar::{
//!     CalendarBuilder, LeapYearRule, MonthDefinition, TimeComponents, TimeConverter,
//!     WeekdayDefinition,
//! };
//!
//! let calendar = CalendarBuilder::new("Twelve Thirties")
//!     .with_months((1..=12).map(|i| MonthDefinition::new(format!("Month {i}"), i, 30)))
//!     .with_weekdays((1..=10).map(|i| WeekdayDefinition::new(format!("Day {i}"))))
//!     .with_leap_rule(LeapYearRule::Gregorian)
//!     .build()
//!     .unwrap();
//!
//! let converter = TimeConverter::new(&calendar);
//! let now = converter.time_to_components(86_400 * 45);
//! assert_eq!(now, TimeComponents::new(0, 1, 15));
//! assert_eq!(calendar.weekday_index(&now), 5);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `definition` | Calendar definition types and the validating builder |
//! | `leap` | Leap-year rules and the interval voting evaluator |
//! | `layout` | Precomputed month and non-counting-day tables |
//! | `time` | Scalar time to component conversion |
//! | `weekday` | Weekday and week-number resolution |
//! | `festival` | Festivals and their spans |
//! | `season` | Dated and periodic seasons |
//! | `era` | Era lookup |
//! | `cycle` | Named repeating cycles |
//! | `climate` | Climate profiles and zones |
//! | `moon` | Moon records |
//! | `parts` | Raw tokens for date formatters |
//! | `sequence` | Consecutive day sequences |
//! | `error` | Error types |

mod climate;
mod cycle;
mod definition;
mod era;
mod error;
mod festival;
mod layout;
mod leap;
mod moon;
mod parts;
mod season;
mod sequence;
mod time;
mod weekday;

pub use climate::{
    ClimateProfile, ClimateZone, DEFAULT_TEMPERATURE_KEY, SeasonOverride, TemperatureRange,
    ZonePreset,
};
pub use cycle::{CycleBasis, CycleDefinition, CycleMatch, CycleStage};
pub use definition::{
    CalendarBuilder, CalendarDefinition, CanonicalHour, DaylightConfig, MonthDay,
    MonthDefinition, MonthKind, TimeUnits, WeekdayDefinition,
};
pub use era::{EraDefinition, EraMatch};
pub use error::CalendarError;
pub use festival::{FestivalAnchor, FestivalDefinition};
pub use leap::{LeapInterval, LeapYearRule, parse_leap_pattern};
pub use moon::{DEFAULT_PHASE_NAMES, MoonDefinition, PhaseDefinition, PhaseRange, ReferenceDate};
pub use parts::{DateParts, Meridiem};
pub use season::{SeasonDefinition, SeasonMatch, SeasonMode, SeasonSet};
pub use sequence::day_sequence;
pub use time::{TimeComponents, TimeConverter};
