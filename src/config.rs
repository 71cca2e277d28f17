use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;

/// Top-level orrery configuration: one calendar plus its weather catalog.
///
/// Month, day and day-of-year values are 1-based here. Weekday and phase
/// values are 0-based indices.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrreryConfig {
    /// Calendar-wide settings.
    pub calendar: CalendarToml,

    /// Months in year order.
    pub months: Vec<MonthToml>,

    /// Weekdays in week order.
    pub weekdays: Vec<WeekdayToml>,

    #[serde(default)]
    pub festivals: Vec<FestivalToml>,

    #[serde(default)]
    pub seasons: Option<SeasonsToml>,

    #[serde(default)]
    pub moons: Vec<MoonToml>,

    #[serde(default)]
    pub eras: Vec<EraToml>,

    #[serde(default)]
    pub cycles: Vec<CycleToml>,

    #[serde(default)]
    pub canonical_hours: Vec<CanonicalHourToml>,

    #[serde(default)]
    pub daylight: Option<DaylightToml>,

    #[serde(default)]
    pub zones: Vec<ZoneToml>,

    /// Weather preset catalog.
    #[serde(default)]
    pub weather: Vec<WeatherPresetToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    pub name: String,
    #[serde(default)]
    pub year_zero: i64,
    #[serde(default = "default_true")]
    pub has_year_zero: bool,
    #[serde(default)]
    pub first_weekday: usize,
    /// Seconds added to every timestamp before conversion.
    #[serde(default)]
    pub epoch_offset: i64,
    #[serde(default)]
    pub time: TimeToml,
    #[serde(default)]
    pub leap: LeapToml,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeToml {
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: u32,
    #[serde(default = "default_sixty")]
    pub minutes_per_hour: u32,
    #[serde(default = "default_sixty")]
    pub seconds_per_minute: u32,
}

impl Default for TimeToml {
    fn default() -> Self {
        Self {
            hours_per_day: default_hours_per_day(),
            minutes_per_hour: default_sixty(),
            seconds_per_minute: default_sixty(),
        }
    }
}

fn default_hours_per_day() -> u32 {
    24
}
fn default_sixty() -> u32 {
    60
}

/// Leap year rule. `rule` is one of `none`, `simple`, `gregorian` or
/// `custom`; `simple` needs `interval`, `custom` needs `pattern`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeapToml {
    #[serde(default = "default_leap_rule")]
    pub rule: String,
    #[serde(default)]
    pub interval: Option<i64>,
    #[serde(default)]
    pub start: i64,
    #[serde(default)]
    pub pattern: Option<String>,
}

impl Default for LeapToml {
    fn default() -> Self {
        Self {
            rule: default_leap_rule(),
            interval: None,
            start: 0,
            pattern: None,
        }
    }
}

fn default_leap_rule() -> String {
    "none".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonthToml {
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    pub days: u32,
    #[serde(default)]
    pub leap_days: Option<u32>,
    #[serde(default)]
    pub intercalary: bool,
    #[serde(default)]
    pub starting_weekday: Option<usize>,
    #[serde(default)]
    pub weekday_names: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeekdayToml {
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub rest_day: bool,
}

/// A 1-based month and day.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateToml {
    pub month: usize,
    pub day: u32,
}

/// Festival anchored either on `day_of_year` or on `date`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FestivalToml {
    pub name: String,
    #[serde(default)]
    pub day_of_year: Option<u32>,
    #[serde(default)]
    pub date: Option<DateToml>,
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default)]
    pub leap_duration: Option<u32>,
    #[serde(default)]
    pub leap_year_only: bool,
    #[serde(default = "default_true")]
    pub counts_for_weekday: bool,
}

fn default_duration() -> u32 {
    1
}

/// Seasons. `mode` is `dated` or `periodic`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonsToml {
    #[serde(default = "default_season_mode")]
    pub mode: String,
    /// Day-of-year offset of the first periodic season.
    #[serde(default)]
    pub offset: u32,
    pub list: Vec<SeasonToml>,
}

fn default_season_mode() -> String {
    "dated".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonToml {
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub start: Option<DateToml>,
    #[serde(default)]
    pub end: Option<DateToml>,
    #[serde(default)]
    pub duration: Option<u32>,
    /// `[min, max]` base temperature.
    #[serde(default)]
    pub temperature: Option<[f64; 2]>,
    /// Preset id to selection weight.
    #[serde(default)]
    pub presets: IndexMap<String, f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoonToml {
    pub name: String,
    pub cycle_length: f64,
    #[serde(default)]
    pub cycle_day_adjust: f64,
    #[serde(default)]
    pub reference: Option<ReferenceToml>,
    #[serde(default)]
    pub reference_phase: usize,
    #[serde(default)]
    pub phases: Vec<PhaseToml>,
}

/// A display year with a 1-based month and day.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceToml {
    pub year: i64,
    pub month: usize,
    pub day: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhaseToml {
    pub name: String,
    #[serde(default)]
    pub rising: Option<String>,
    #[serde(default)]
    pub fading: Option<String>,
    /// `[start, end)` as fractions of the cycle, in `0..=1`.
    #[serde(default)]
    pub range: Option<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EraToml {
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    pub start_year: i64,
    #[serde(default)]
    pub end_year: Option<i64>,
}

/// Named cycle. `based_on` is one of `year`, `era_year`, `month`,
/// `month_day`, `day` or `year_day`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CycleToml {
    pub name: String,
    pub based_on: String,
    pub stages: Vec<String>,
    #[serde(default)]
    pub length: Option<u32>,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanonicalHourToml {
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DaylightToml {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub shortest_day: f64,
    pub longest_day: f64,
    #[serde(default)]
    pub winter_solstice: Option<u32>,
    #[serde(default)]
    pub summer_solstice: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoneToml {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    /// `[shortest, longest]` daylight hours.
    #[serde(default)]
    pub day_lengths: Option<[f64; 2]>,
    /// Season name (or `_default`) to `[min, max]`.
    #[serde(default)]
    pub temperatures: IndexMap<String, [f64; 2]>,
    #[serde(default)]
    pub presets: IndexMap<String, ZonePresetToml>,
    /// Season name to override.
    #[serde(default)]
    pub overrides: IndexMap<String, SeasonOverrideToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZonePresetToml {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub chance: f64,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonOverrideToml {
    #[serde(default)]
    pub temperature: Option<[f64; 2]>,
    #[serde(default)]
    pub presets: IndexMap<String, f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherPresetToml {
    pub id: String,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<f64>,
    #[serde(default)]
    pub darkness_penalty: f64,
}

/// Reads and parses a configuration file.
pub fn load(path: &Path) -> Result<OrreryConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}
