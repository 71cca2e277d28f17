//! # orrery-weather
//!
//! Procedural weather for orrery calendars.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     S["season climate"] -->|"preset_table()"| T["weights"]
//!     Z["ClimateZone"] -->|"preset_table()"| T
//!     T -->|"select_preset()"| P["preset id"]
//!     P -->|"temperature_range()"| R["TemperatureRange"]
//!     R --> W["Weather"]
//!     P --> W
//! ```
//!
//! Each day draws twice from the generator: once to pick the preset and
//! once for the temperature. Date-seeded generation uses [`Mulberry32`], so
//! a date always gets the same weather.
//!
//! ## Quick Start
//!
//! ```
//! use orrery_calendar::{ClimateProfile, SeasonDefinition};
//! use orrery_weather::{WeatherRequest, generate_seeded};
//!
//! let summer = SeasonDefinition::periodic("Summer", None).with_climate(
//!     ClimateProfile::default()
//!         .with_temperatures(20.0, 30.0)
//!         .with_preset("clear", 3.0)
//!         .with_preset("rain", 1.0),
//! );
//! let request = WeatherRequest::new().with_season(&summer);
//! let weather = generate_seeded(&request, 42);
//! assert_eq!(weather, generate_seeded(&request, 42));
//! assert!((20.0..=30.0).contains(&weather.temperature));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `catalog` | Weather presets supplied by the application |
//! | `table` | Layered preset weights and weighted selection |
//! | `temperature` | Temperature range resolution |
//! | `rng` | mulberry32 and date seeds |
//! | `generate` | Single-day generation and forecasts |
//! | `error` | Error types |

mod catalog;
mod error;
mod generate;
mod rng;
mod table;
mod temperature;

pub use catalog::{WeatherCatalog, WeatherPreset};
pub use error::WeatherError;
pub use generate::{
    ForecastDay, Weather, WeatherRequest, forecast, generate, generate_for_date, generate_seeded,
};
pub use rng::{Mulberry32, date_seed};
pub use table::{FALLBACK_PRESET, preset_table, select_preset};
pub use temperature::{DEFAULT_TEMPERATURE, temperature_range};
