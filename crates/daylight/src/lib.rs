//! # orrery-daylight
//!
//! Daylight hours and sun times for orrery calendars.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     Z["ClimateZone latitude"] -->|"daylight_from_latitude()"| D["Daylight"]
//!     M["zone day lengths"] -->|"daylight_from_curve()"| D
//!     C["DaylightConfig"] -->|"daylight_from_curve()"| D
//!     D -->|"solar_day()"| S["SolarDay"]
//! ```
//!
//! Every day is symmetric around the middle of the day: sunrise and sunset
//! sit half the daylight span either side of it.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `model` | Latitude and solstice-curve formulas |
//! | `solar` | Resolution order and sun times for calendar dates |

mod model;
mod solar;

pub use model::{AXIAL_TILT_DEGREES, daylight_from_curve, daylight_from_latitude};
pub use solar::{
    Daylight, DaylightSource, SolarDay, daylight_hours, is_daytime, solar_day, solar_midday,
    solar_midnight, sunrise, sunset,
};
