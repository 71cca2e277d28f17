//! Climate records attached to seasons and zones.
//!
//! These are plain data; the weather generator layers them into preset
//! tables and temperature ranges.

use indexmap::IndexMap;

use crate::error::CalendarError;

/// Key of a zone's zone-wide fallback temperature range.
pub const DEFAULT_TEMPERATURE_KEY: &str = "_default";

/// An inclusive temperature range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl TemperatureRange {
    /// Creates a range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn check(&self) -> Result<(), String> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(format!(
                "temperature range {}..{} is not finite",
                self.min, self.max
            ));
        }
        if self.min > self.max {
            return Err(format!(
                "temperature range {}..{} has min above max",
                self.min, self.max
            ));
        }
        Ok(())
    }
}

fn check_chances(presets: &IndexMap<String, f64>) -> Result<(), String> {
    for (id, &chance) in presets {
        if !chance.is_finite() || chance < 0.0 {
            return Err(format!("preset {id:?} has invalid chance {chance}"));
        }
    }
    Ok(())
}

/// Weather tendencies of a season.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClimateProfile {
    /// Base temperature range for the season.
    pub temperatures: Option<TemperatureRange>,
    /// Weather preset id to relative chance.
    pub presets: IndexMap<String, f64>,
}

impl ClimateProfile {
    /// Sets the base temperature range.
    pub fn with_temperatures(mut self, min: f64, max: f64) -> Self {
        self.temperatures = Some(TemperatureRange::new(min, max));
        self
    }

    /// Adds or replaces a preset chance.
    pub fn with_preset(mut self, id: impl Into<String>, chance: f64) -> Self {
        self.presets.insert(id.into(), chance);
        self
    }

    pub(crate) fn check(&self) -> Result<(), String> {
        if let Some(range) = &self.temperatures {
            range.check()?;
        }
        check_chances(&self.presets)
    }
}

/// A zone's setting for one weather preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZonePreset {
    /// Disabled presets never occur in the zone.
    pub enabled: bool,
    /// Relative chance.
    pub chance: f64,
    /// Replaces the lower temperature bound while this preset is active.
    pub temp_min: Option<f64>,
    /// Replaces the upper temperature bound while this preset is active.
    pub temp_max: Option<f64>,
}

impl ZonePreset {
    /// Creates an enabled preset with the given chance.
    pub const fn new(chance: f64) -> Self {
        Self {
            enabled: true,
            chance,
            temp_min: None,
            temp_max: None,
        }
    }

    /// Disables the preset.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Overrides the lower temperature bound.
    pub fn with_temp_min(mut self, min: f64) -> Self {
        self.temp_min = Some(min);
        self
    }

    /// Overrides the upper temperature bound.
    pub fn with_temp_max(mut self, max: f64) -> Self {
        self.temp_max = Some(max);
        self
    }
}

/// A zone's replacement climate for one season.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeasonOverride {
    /// Replaces every other temperature source for the season.
    pub temperatures: Option<TemperatureRange>,
    /// Overrides preset chances; a chance of 0 removes the preset.
    pub presets: IndexMap<String, f64>,
}

impl SeasonOverride {
    /// Sets the temperature range.
    pub fn with_temperatures(mut self, min: f64, max: f64) -> Self {
        self.temperatures = Some(TemperatureRange::new(min, max));
        self
    }

    /// Adds or replaces a preset chance.
    pub fn with_preset(mut self, id: impl Into<String>, chance: f64) -> Self {
        self.presets.insert(id.into(), chance);
        self
    }
}

/// A named geographic or weather profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateZone {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Latitude in degrees; drives the astronomical daylight model.
    pub latitude: Option<f64>,
    /// Manual daylight hours at the winter solstice.
    pub shortest_day: Option<f64>,
    /// Manual daylight hours at the summer solstice.
    pub longest_day: Option<f64>,
    /// Season name to temperature range; [`DEFAULT_TEMPERATURE_KEY`] is the
    /// zone-wide fallback.
    pub temperatures: IndexMap<String, TemperatureRange>,
    /// Preset id to zone setting; the zone's default preset table.
    pub presets: IndexMap<String, ZonePreset>,
    /// Season name to replacement climate.
    pub season_overrides: IndexMap<String, SeasonOverride>,
}

impl ClimateZone {
    /// Creates an empty zone named after its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            latitude: None,
            shortest_day: None,
            longest_day: None,
            temperatures: IndexMap::new(),
            presets: IndexMap::new(),
            season_overrides: IndexMap::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the latitude in degrees.
    pub fn with_latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    /// Sets manual solstice day lengths in hours.
    pub fn with_day_lengths(mut self, shortest: f64, longest: f64) -> Self {
        self.shortest_day = Some(shortest);
        self.longest_day = Some(longest);
        self
    }

    /// Sets the temperature range for a season.
    pub fn with_temperature(mut self, season: impl Into<String>, min: f64, max: f64) -> Self {
        self.temperatures
            .insert(season.into(), TemperatureRange::new(min, max));
        self
    }

    /// Sets the zone-wide fallback temperature range.
    pub fn with_default_temperature(self, min: f64, max: f64) -> Self {
        self.with_temperature(DEFAULT_TEMPERATURE_KEY, min, max)
    }

    /// Adds or replaces a preset setting.
    pub fn with_preset(mut self, id: impl Into<String>, preset: ZonePreset) -> Self {
        self.presets.insert(id.into(), preset);
        self
    }

    /// Adds or replaces a season override.
    pub fn with_season_override(mut self, season: impl Into<String>, o: SeasonOverride) -> Self {
        self.season_overrides.insert(season.into(), o);
        self
    }

    /// Manual day lengths, when both are set.
    pub fn manual_day_lengths(&self) -> Option<(f64, f64)> {
        self.shortest_day.zip(self.longest_day)
    }

    /// The zone's temperature range for a season, falling back to the
    /// zone-wide default.
    pub fn temperature_for(&self, season: Option<&str>) -> Option<TemperatureRange> {
        season
            .and_then(|s| self.temperatures.get(s))
            .or_else(|| self.temperatures.get(DEFAULT_TEMPERATURE_KEY))
            .copied()
    }

    pub(crate) fn validate(&self, hours_per_day: u32) -> Result<(), CalendarError> {
        self.check(hours_per_day)
            .map_err(|reason| CalendarError::InvalidClimateZone {
                id: self.id.clone(),
                reason,
            })
    }

    fn check(&self, hours_per_day: u32) -> Result<(), String> {
        let hpd = f64::from(hours_per_day);
        for hours in [self.shortest_day, self.longest_day].into_iter().flatten() {
            if !hours.is_finite() || !(0.0..=hpd).contains(&hours) {
                return Err(format!("day length {hours} outside 0..={hpd} hours"));
            }
        }
        if let Some((shortest, longest)) = self.manual_day_lengths() {
            if shortest > longest {
                return Err(format!(
                    "shortest day {shortest} exceeds longest day {longest}"
                ));
            }
        }
        for range in self.temperatures.values() {
            range.check()?;
        }
        for (id, preset) in &self.presets {
            if !preset.chance.is_finite() || preset.chance < 0.0 {
                return Err(format!("preset {id:?} has invalid chance {}", preset.chance));
            }
            if preset.temp_min.is_some_and(|t| !t.is_finite())
                || preset.temp_max.is_some_and(|t| !t.is_finite())
            {
                return Err(format!("preset {id:?} has a non-finite temperature bound"));
            }
        }
        for o in self.season_overrides.values() {
            if let Some(range) = &o.temperatures {
                range.check()?;
            }
            check_chances(&o.presets)?;
        }
        Ok(())
    }
}
