//! Weather preset catalog supplied by the embedding application.

use indexmap::IndexMap;

/// A kind of weather, e.g. "clear" or "blizzard".
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPreset {
    /// Unique identifier referenced by climate tables.
    pub id: String,
    /// Typical lower temperature bound.
    pub temp_min: Option<f64>,
    /// Typical upper temperature bound.
    pub temp_max: Option<f64>,
    /// How much the weather darkens the sky, 0 for none.
    pub darkness_penalty: f64,
}

impl WeatherPreset {
    /// Creates a preset with no temperature bounds and no darkness.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            temp_min: None,
            temp_max: None,
            darkness_penalty: 0.0,
        }
    }

    /// Sets the typical temperature range.
    pub fn with_temperatures(mut self, min: f64, max: f64) -> Self {
        self.temp_min = Some(min);
        self.temp_max = Some(max);
        self
    }

    /// Sets the darkness penalty.
    pub fn with_darkness_penalty(mut self, penalty: f64) -> Self {
        self.darkness_penalty = penalty;
        self
    }
}

/// Read-only presets keyed by id, in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherCatalog {
    presets: IndexMap<String, WeatherPreset>,
}

impl WeatherCatalog {
    /// Creates a catalog. Later presets replace earlier ones with the same id.
    pub fn new(presets: impl IntoIterator<Item = WeatherPreset>) -> Self {
        Self {
            presets: presets.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    /// Preset by id.
    pub fn get(&self, id: &str) -> Option<&WeatherPreset> {
        self.presets.get(id)
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Presets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &WeatherPreset> {
        self.presets.values()
    }
}
