//! Daylight and sun times for calendar dates.

use orrery_calendar::{CalendarDefinition, ClimateZone, TimeComponents};
use tracing::debug;

use crate::model::{daylight_from_curve, daylight_from_latitude};

/// Which model produced a daylight value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaylightSource {
    /// The zone's latitude.
    Latitude,
    /// The zone's manual day lengths.
    Zone,
    /// The calendar-wide daylight curve.
    Calendar,
    /// Nothing configured; half the day.
    Fallback,
}

/// Daylight hours on one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Daylight {
    /// Hours of daylight, in `0..=hours_per_day`.
    pub hours: f64,
    /// Model that produced the value.
    pub source: DaylightSource,
}

/// Sun times on one day, in hours since midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    /// Hour of sunrise.
    pub sunrise: f64,
    /// Hour of sunset.
    pub sunset: f64,
    /// Midpoint of the daylight span.
    pub solar_midday: f64,
    /// Midpoint of the night span. May exceed the day length, meaning it
    /// falls on the next day.
    pub solar_midnight: f64,
    /// Daylight used to place the times.
    pub daylight: Daylight,
}

/// Daylight hours on the date in `c`.
///
/// Resolution order: a finite zone latitude, the zone's manual day
/// lengths, the calendar's daylight curve if enabled, then half the day.
pub fn daylight_hours(
    calendar: &CalendarDefinition,
    c: &TimeComponents,
    zone: Option<&ClimateZone>,
) -> Daylight {
    let hours_per_day = f64::from(calendar.time_units().hours_per_day);
    let days = calendar.days_in_year(c.year);
    let doy = calendar.day_of_year(c);
    let config = calendar.daylight();
    let (winter, summer) = config.solstices(days);

    if let Some(latitude) = zone.and_then(|z| z.latitude).filter(|l| l.is_finite()) {
        return Daylight {
            hours: daylight_from_latitude(latitude, doy, days, summer, hours_per_day),
            source: DaylightSource::Latitude,
        };
    }
    if let Some((shortest, longest)) = zone.and_then(ClimateZone::manual_day_lengths) {
        return Daylight {
            hours: daylight_from_curve(doy, days, winter, summer, shortest, longest),
            source: DaylightSource::Zone,
        };
    }
    if config.enabled {
        return Daylight {
            hours: daylight_from_curve(
                doy,
                days,
                winter,
                summer,
                config.shortest_day,
                config.longest_day,
            ),
            source: DaylightSource::Calendar,
        };
    }
    debug!(zone = zone.map(|z| z.id.as_str()), "no daylight model configured, using half the day");
    Daylight {
        hours: hours_per_day / 2.0,
        source: DaylightSource::Fallback,
    }
}

/// Sun times on the date in `c`, centred on the middle of the day.
pub fn solar_day(
    calendar: &CalendarDefinition,
    c: &TimeComponents,
    zone: Option<&ClimateZone>,
) -> SolarDay {
    let hours_per_day = f64::from(calendar.time_units().hours_per_day);
    let daylight = daylight_hours(calendar, c, zone);
    let midday = hours_per_day / 2.0;
    let sunrise = midday - daylight.hours / 2.0;
    let sunset = midday + daylight.hours / 2.0;
    SolarDay {
        sunrise,
        sunset,
        solar_midday: (sunrise + sunset) / 2.0,
        solar_midnight: sunset + (hours_per_day - daylight.hours) / 2.0,
        daylight,
    }
}

/// Hour of sunrise on the date in `c`.
pub fn sunrise(calendar: &CalendarDefinition, c: &TimeComponents, zone: Option<&ClimateZone>) -> f64 {
    solar_day(calendar, c, zone).sunrise
}

/// Hour of sunset on the date in `c`.
pub fn sunset(calendar: &CalendarDefinition, c: &TimeComponents, zone: Option<&ClimateZone>) -> f64 {
    solar_day(calendar, c, zone).sunset
}

/// Hour of solar midday on the date in `c`.
pub fn solar_midday(
    calendar: &CalendarDefinition,
    c: &TimeComponents,
    zone: Option<&ClimateZone>,
) -> f64 {
    solar_day(calendar, c, zone).solar_midday
}

/// Hour of solar midnight following the date in `c`.
pub fn solar_midnight(
    calendar: &CalendarDefinition,
    c: &TimeComponents,
    zone: Option<&ClimateZone>,
) -> f64 {
    solar_day(calendar, c, zone).solar_midnight
}

/// Whether the sun is up at the time of day in `c`.
pub fn is_daytime(calendar: &CalendarDefinition, c: &TimeComponents, zone: Option<&ClimateZone>) -> bool {
    let units = calendar.time_units();
    let hour = f64::from(c.hour)
        + f64::from(c.minute) / f64::from(units.minutes_per_hour)
        + f64::from(c.second) / units.seconds_per_hour() as f64;
    let day = solar_day(calendar, c, zone);
    hour >= day.sunrise && hour < day.sunset
}
