//! JSON report types printed by the subcommands.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use orrery_calendar::{CalendarDefinition, DateParts, Meridiem, TimeComponents};
use orrery_daylight::{DaylightSource, SolarDay};
use orrery_weather::{ForecastDay, Weather};

/// A date with 1-based month, day and day of year.
#[derive(Debug, Serialize)]
pub struct DateReport {
    pub year: i64,
    pub month: usize,
    pub month_name: String,
    pub day: u32,
    pub day_of_year: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub hour12: u32,
    pub meridiem: &'static str,
    pub weekday: String,
    pub week: u32,
}

impl From<&DateParts<'_>> for DateReport {
    fn from(p: &DateParts<'_>) -> Self {
        Self {
            year: p.year,
            month: p.month_index + 1,
            month_name: p.month_name.to_string(),
            day: p.day,
            day_of_year: p.day_of_year,
            hour: p.hour,
            minute: p.minute,
            second: p.second,
            hour12: p.hour12,
            meridiem: match p.meridiem {
                Meridiem::Am => "AM",
                Meridiem::Pm => "PM",
            },
            weekday: p.weekday_name.to_string(),
            week: p.week,
        }
    }
}

impl DateReport {
    pub fn new(calendar: &CalendarDefinition, c: &TimeComponents) -> Self {
        Self::from(&calendar.date_parts(c))
    }
}

#[derive(Debug, Serialize)]
pub struct EraReport {
    pub name: String,
    pub abbreviation: Option<String>,
    pub year_in_era: i64,
    pub fallback: bool,
}

#[derive(Debug, Serialize)]
pub struct SeasonReport {
    pub name: String,
    pub fallback: bool,
}

#[derive(Debug, Serialize)]
pub struct CycleReport {
    pub name: String,
    pub stage: String,
    pub cycle_number: i64,
}

#[derive(Debug, Serialize)]
pub struct MoonReport {
    pub name: String,
    pub phase: String,
    pub sub_phase: String,
    pub day_in_cycle: f64,
    pub position: f64,
    pub days_until_next_phase: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SunReport {
    pub daylight_hours: f64,
    pub source: &'static str,
    pub sunrise: f64,
    pub sunset: f64,
    pub solar_midday: f64,
    pub solar_midnight: f64,
    pub is_daytime: bool,
}

impl SunReport {
    pub fn new(day: &SolarDay, is_daytime: bool) -> Self {
        Self {
            daylight_hours: day.daylight.hours,
            source: match day.daylight.source {
                DaylightSource::Latitude => "latitude",
                DaylightSource::Zone => "zone",
                DaylightSource::Calendar => "calendar",
                DaylightSource::Fallback => "fallback",
            },
            sunrise: day.sunrise,
            sunset: day.sunset,
            solar_midday: day.solar_midday,
            solar_midnight: day.solar_midnight,
            is_daytime,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WeatherReport {
    pub preset: String,
    pub temperature: f64,
    pub darkness_penalty: f64,
}

impl From<Weather> for WeatherReport {
    fn from(w: Weather) -> Self {
        Self {
            preset: w.preset_id,
            temperature: w.temperature,
            darkness_penalty: w.darkness_penalty,
        }
    }
}

/// Everything known about one instant.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub calendar: String,
    pub time: i64,
    pub date: DateReport,
    pub leap_year: bool,
    pub era: Option<EraReport>,
    pub season: Option<SeasonReport>,
    pub festivals: Vec<String>,
    pub non_counting_day: bool,
    pub canonical_hour: Option<String>,
    pub cycles: Vec<CycleReport>,
    pub moons: Vec<MoonReport>,
    pub zone: Option<String>,
    pub sun: SunReport,
    pub weather: WeatherReport,
}

#[derive(Debug, Serialize)]
pub struct TimestampReport {
    pub calendar: String,
    pub time: i64,
    pub date: DateReport,
}

#[derive(Debug, Serialize)]
pub struct ForecastDayReport {
    pub date: DateReport,
    pub season: Option<String>,
    pub weather: WeatherReport,
}

impl ForecastDayReport {
    pub fn new(calendar: &CalendarDefinition, day: ForecastDay) -> Self {
        Self {
            date: DateReport::new(calendar, &day.date),
            season: day.season,
            weather: day.weather.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ForecastReport {
    pub calendar: String,
    pub zone: Option<String>,
    pub days: Vec<ForecastDayReport>,
}

/// Writes `report` to stdout as pretty JSON.
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, report).context("failed to serialize report")?;
    writeln!(out).context("failed to write report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_report_is_one_based() {
        let cfg = toml::from_str(include_str!("../orrery.toml")).unwrap();
        let cal = crate::convert::build_calendar(&cfg).unwrap();
        let report = DateReport::new(&cal, &TimeComponents::new(0, 0, 0).with_time(13, 5, 0));
        assert_eq!(report.month, 1);
        assert_eq!(report.day, 1);
        assert_eq!(report.day_of_year, 1);
        assert_eq!(report.meridiem, "PM");
        assert_eq!(report.month_name, "Deepfrost");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["weekday"], "Moonday");
        assert_eq!(json["hour12"], 1);
    }
}
