//! Pure daylight formulas.

use std::f64::consts::PI;

/// Axial tilt used by the latitude model, in degrees.
pub const AXIAL_TILT_DEGREES: f64 = 23.44;

/// Daylight hours at `latitude` degrees on `day_of_year`.
///
/// The solar declination peaks on `summer_solstice`. Polar day and night
/// clamp to `hours_per_day` and 0. Latitudes beyond ±90° are clamped;
/// non-finite latitudes yield NaN and should be filtered by the caller.
pub fn daylight_from_latitude(
    latitude: f64,
    day_of_year: u32,
    days_in_year: u32,
    summer_solstice: u32,
    hours_per_day: f64,
) -> f64 {
    let days = f64::from(days_in_year.max(1));
    let angle = 2.0 * PI * (f64::from(day_of_year) - f64::from(summer_solstice)) / days;
    let declination = AXIAL_TILT_DEGREES.to_radians() * angle.cos();
    let latitude = latitude.clamp(-90.0, 90.0).to_radians();

    let cos_h = -latitude.tan() * declination.tan();
    if cos_h <= -1.0 {
        hours_per_day
    } else if cos_h >= 1.0 {
        0.0
    } else {
        cos_h.acos() / PI * hours_per_day
    }
}

/// Daylight hours on `day_of_year` along a cosine-eased curve between the
/// winter and summer solstices.
///
/// Both halves of the year are handled, including solstices that wrap past
/// the year end. Coinciding solstices give the midpoint of the two day
/// lengths.
pub fn daylight_from_curve(
    day_of_year: u32,
    days_in_year: u32,
    winter_solstice: u32,
    summer_solstice: u32,
    shortest_day: f64,
    longest_day: f64,
) -> f64 {
    let days = i64::from(days_in_year.max(1));
    let winter = i64::from(winter_solstice);
    let rising = (i64::from(summer_solstice) - winter).rem_euclid(days);
    if rising == 0 {
        return (shortest_day + longest_day) / 2.0;
    }
    let since_winter = (i64::from(day_of_year) - winter).rem_euclid(days);
    let ease = |progress: f64| (1.0 - (progress * PI).cos()) / 2.0;
    let span = longest_day - shortest_day;

    if since_winter <= rising {
        let progress = since_winter as f64 / rising as f64;
        shortest_day + span * ease(progress)
    } else {
        let progress = (since_winter - rising) as f64 / (days - rising) as f64;
        longest_day - span * ease(progress)
    }
}
