//! Weather generation for a single day and multi-day forecasts.

use orrery_calendar::{
    CalendarDefinition, ClimateProfile, ClimateZone, SeasonDefinition, TimeComponents,
    day_sequence,
};
use rand::RngCore;
use tracing::debug;

use crate::catalog::WeatherCatalog;
use crate::error::WeatherError;
use crate::rng::{Mulberry32, date_seed, unit};
use crate::table::{FALLBACK_PRESET, preset_table, select_preset};
use crate::temperature::temperature_range;

/// Inputs for generating one day of weather.
///
/// Every part is optional. With nothing set the result is clear weather in
/// the default 10..20 range.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherRequest<'a> {
    /// Name of the current season.
    pub season: Option<&'a str>,
    /// Climate of the current season.
    pub climate: Option<&'a ClimateProfile>,
    /// Climate zone overriding the season's climate.
    pub zone: Option<&'a ClimateZone>,
    /// Preset catalog providing temperature ranges and darkness.
    pub catalog: Option<&'a WeatherCatalog>,
}

impl<'a> WeatherRequest<'a> {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a season's name and climate.
    pub fn with_season(mut self, season: &'a SeasonDefinition) -> Self {
        self.season = Some(season.name.as_str());
        self.climate = season.climate.as_ref();
        self
    }

    /// Uses a climate zone.
    pub fn with_zone(mut self, zone: &'a ClimateZone) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Uses a preset catalog.
    pub fn with_catalog(mut self, catalog: &'a WeatherCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }
}

/// Generated weather for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
    /// Id of the selected preset.
    pub preset_id: String,
    /// Temperature, rounded to a whole degree.
    pub temperature: f64,
    /// Darkness penalty of the preset, 0 when the catalog lacks it.
    pub darkness_penalty: f64,
}

/// Generates weather from two draws of `rng`: the first selects the
/// preset, the second places the temperature within its range.
pub fn generate(request: &WeatherRequest<'_>, rng: &mut impl RngCore) -> Weather {
    let table = preset_table(request.season, request.climate, request.zone);
    let preset_id = select_preset(&table, unit(rng))
        .unwrap_or(FALLBACK_PRESET)
        .to_string();

    let range = temperature_range(
        &preset_id,
        request.season,
        request.climate,
        request.zone,
        request.catalog,
    );
    let temperature = (range.min + unit(rng) * (range.max - range.min)).round();
    let darkness_penalty = request
        .catalog
        .and_then(|c| c.get(&preset_id))
        .map_or(0.0, |p| p.darkness_penalty);

    Weather {
        preset_id,
        temperature,
        darkness_penalty,
    }
}

/// Generates weather from a fresh [`Mulberry32`] seeded with `seed`.
pub fn generate_seeded(request: &WeatherRequest<'_>, seed: u32) -> Weather {
    generate(request, &mut Mulberry32::new(seed))
}

/// Generates the weather for a date. The same date always yields the same
/// weather.
pub fn generate_for_date(request: &WeatherRequest<'_>, c: &TimeComponents) -> Weather {
    generate_seeded(request, date_seed(c))
}

/// One day of a [`forecast`].
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    /// The date.
    pub date: TimeComponents,
    /// Name of the season in effect, if any.
    pub season: Option<String>,
    /// Weather for the date.
    pub weather: Weather,
}

/// Date-seeded weather for `days` consecutive days from `start`.
///
/// The season is resolved separately for every day, so a forecast that
/// crosses a season boundary switches climate tables. Repeating a call
/// gives the same forecast.
///
/// # Errors
///
/// Returns [`WeatherError::UnknownZone`] when `zone_id` names a zone the
/// calendar does not define.
#[tracing::instrument(skip(calendar, catalog), fields(calendar = calendar.name()))]
pub fn forecast(
    calendar: &CalendarDefinition,
    start: &TimeComponents,
    days: usize,
    zone_id: Option<&str>,
    catalog: Option<&WeatherCatalog>,
) -> Result<Vec<ForecastDay>, WeatherError> {
    let zone = zone_id
        .map(|id| {
            calendar
                .climate_zone(id)
                .ok_or_else(|| WeatherError::UnknownZone { id: id.to_string() })
        })
        .transpose()?;

    let out: Vec<ForecastDay> = day_sequence(calendar, *start, days)
        .into_iter()
        .map(|date| {
            let season = calendar.season(&date).map(|m| m.season);
            let mut request = WeatherRequest {
                zone,
                catalog,
                ..WeatherRequest::default()
            };
            if let Some(s) = season {
                request = request.with_season(s);
            }
            let weather = generate_for_date(&request, &date);
            ForecastDay {
                date,
                season: season.map(|s| s.name.clone()),
                weather,
            }
        })
        .collect();

    debug!(days = out.len(), "forecast generated");
    Ok(out)
}
