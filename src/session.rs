//! A loaded configuration: the calendar, its weather catalog and epoch.

use std::path::Path;

use anyhow::{Result, bail};
use tracing::info;

use orrery_calendar::{CalendarDefinition, ClimateZone, TimeConverter};
use orrery_weather::WeatherCatalog;

use crate::config::{self, OrreryConfig};
use crate::convert;

pub struct Session {
    pub calendar: CalendarDefinition,
    pub catalog: WeatherCatalog,
    pub epoch_offset: i64,
}

impl Session {
    /// Reads `path` and builds everything the subcommands need.
    pub fn load(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "loading calendar");
        let cfg = config::load(path)?;
        Self::from_config(&cfg)
    }

    pub fn from_config(cfg: &OrreryConfig) -> Result<Self> {
        let calendar = convert::build_calendar(cfg)?;
        let catalog = convert::build_catalog(&cfg.weather);
        info!(
            calendar = calendar.name(),
            months = calendar.months().len(),
            zones = calendar.climate_zones().len(),
            presets = catalog.len(),
            "calendar ready"
        );
        Ok(Self {
            calendar,
            catalog,
            epoch_offset: cfg.calendar.epoch_offset,
        })
    }

    pub fn converter(&self) -> TimeConverter<'_> {
        TimeConverter::new(&self.calendar).with_epoch_offset(self.epoch_offset)
    }

    /// Looks up an optional zone id, failing on ids the calendar lacks.
    pub fn zone(&self, id: Option<&str>) -> Result<Option<&ClimateZone>> {
        match id {
            None => Ok(None),
            Some(id) => match self.calendar.climate_zone(id) {
                Some(zone) => Ok(Some(zone)),
                None => bail!(
                    "unknown climate zone {id:?}; known zones: {:?}",
                    self.calendar.climate_zones().keys().collect::<Vec<_>>()
                ),
            },
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_session() -> Session {
    let cfg: OrreryConfig = toml::from_str(include_str!("../orrery.toml")).unwrap();
    Session::from_config(&cfg).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_lookup() {
        let session = sample_session();
        assert!(session.zone(None).unwrap().is_none());
        assert_eq!(session.zone(Some("temperate")).unwrap().unwrap().id, "temperate");
        let err = session.zone(Some("atlantis")).unwrap_err();
        assert!(err.to_string().contains("northreach"));
    }
}
