//! Temperature range resolution.

use orrery_calendar::{ClimateProfile, ClimateZone, TemperatureRange};

use crate::catalog::WeatherCatalog;

/// Range used when nothing else provides one.
pub const DEFAULT_TEMPERATURE: TemperatureRange = TemperatureRange::new(10.0, 20.0);

/// Resolves the temperature range for a preset in a season and zone.
///
/// The first source that defines a range wins: the zone's override for the
/// season, the season's own climate, the zone's per-season table, the
/// zone's `_default` entry, the catalog preset, then
/// [`DEFAULT_TEMPERATURE`]. A zone preset's `temp_min`/`temp_max` then
/// replace the matching bound. Bounds are returned in ascending order.
pub fn temperature_range(
    preset_id: &str,
    season: Option<&str>,
    climate: Option<&ClimateProfile>,
    zone: Option<&ClimateZone>,
    catalog: Option<&WeatherCatalog>,
) -> TemperatureRange {
    let zone_override = zone
        .zip(season)
        .and_then(|(z, s)| z.season_overrides.get(s))
        .and_then(|o| o.temperatures);
    let from_catalog = catalog
        .and_then(|c| c.get(preset_id))
        .filter(|p| p.temp_min.is_some() || p.temp_max.is_some())
        .map(|p| {
            TemperatureRange::new(
                p.temp_min.unwrap_or(DEFAULT_TEMPERATURE.min),
                p.temp_max.unwrap_or(DEFAULT_TEMPERATURE.max),
            )
        });

    let mut range = zone_override
        .or_else(|| climate.and_then(|c| c.temperatures))
        .or_else(|| zone.and_then(|z| z.temperature_for(season)))
        .or(from_catalog)
        .unwrap_or(DEFAULT_TEMPERATURE);

    if let Some(p) = zone.and_then(|z| z.presets.get(preset_id)) {
        range.min = p.temp_min.unwrap_or(range.min);
        range.max = p.temp_max.unwrap_or(range.max);
    }
    if range.min > range.max {
        std::mem::swap(&mut range.min, &mut range.max);
    }
    range
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WeatherPreset;
    use orrery_calendar::{SeasonOverride, ZonePreset};

    fn zone() -> ClimateZone {
        ClimateZone::new("vale")
            .with_temperature("Winter", -10.0, 0.0)
            .with_default_temperature(5.0, 15.0)
            .with_season_override(
                "Summer",
                SeasonOverride::default().with_temperatures(25.0, 35.0),
            )
    }

    fn catalog() -> WeatherCatalog {
        WeatherCatalog::new([WeatherPreset::new("snow").with_temperatures(-20.0, -2.0)])
    }

    #[test]
    fn resolution_order() {
        let season_climate = ClimateProfile::default().with_temperatures(12.0, 18.0);
        let z = zone();
        let cat = catalog();

        let r = temperature_range("rain", Some("Summer"), Some(&season_climate), Some(&z), Some(&cat));
        assert_eq!(r, TemperatureRange::new(25.0, 35.0));

        let r = temperature_range("rain", Some("Winter"), Some(&season_climate), Some(&z), Some(&cat));
        assert_eq!(r, TemperatureRange::new(12.0, 18.0));

        let r = temperature_range("rain", Some("Winter"), None, Some(&z), Some(&cat));
        assert_eq!(r, TemperatureRange::new(-10.0, 0.0));

        let r = temperature_range("rain", Some("Autumn"), None, Some(&z), Some(&cat));
        assert_eq!(r, TemperatureRange::new(5.0, 15.0));

        let r = temperature_range("snow", Some("Autumn"), None, None, Some(&cat));
        assert_eq!(r, TemperatureRange::new(-20.0, -2.0));

        let r = temperature_range("rain", None, None, None, None);
        assert_eq!(r, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn zone_preset_replaces_single_bound() {
        let z = zone().with_preset("heatwave", ZonePreset::new(1.0).with_temp_max(45.0));
        let r = temperature_range("heatwave", Some("Autumn"), None, Some(&z), None);
        assert_eq!(r, TemperatureRange::new(5.0, 45.0));
    }

    #[test]
    fn inverted_bounds_are_reordered() {
        let z = zone().with_preset("frost", ZonePreset::new(1.0).with_temp_min(30.0));
        let r = temperature_range("frost", Some("Winter"), None, Some(&z), None);
        assert_eq!(r, TemperatureRange::new(0.0, 30.0));
    }
}
