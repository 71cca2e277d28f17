//! Inspect command: describe everything the calendar knows about an instant.

use anyhow::Result;
use tracing::{debug, info_span};

use orrery_daylight::{is_daytime, solar_day};
use orrery_moon::{days_since_reference, days_until_phase, moon_phases};
use orrery_weather::{WeatherRequest, generate_for_date, generate_seeded};

use crate::cli::InspectArgs;
use crate::report::{
    self, CycleReport, DateReport, EraReport, InspectReport, MoonReport, SeasonReport, SunReport,
};
use crate::session::Session;

/// Run the inspect command.
pub fn run(args: InspectArgs) -> Result<()> {
    let _cmd = info_span!("inspect").entered();
    let session = Session::load(&args.config)?;
    let report = inspect(&session, args.time, args.zone.as_deref(), args.seed)?;
    report::print_json(&report)
}

/// Builds the report for `time`. Weather uses `seed` when given and the
/// date's own seed otherwise.
pub fn inspect(
    session: &Session,
    time: i64,
    zone_id: Option<&str>,
    seed: Option<u32>,
) -> Result<InspectReport> {
    let calendar = &session.calendar;
    let zone = session.zone(zone_id)?;
    let c = session.converter().time_to_components(time);
    debug!(?c, "resolved components");

    let season = calendar.season(&c);
    let mut request = WeatherRequest::new().with_catalog(&session.catalog);
    if let Some(m) = season {
        request = request.with_season(m.season);
    }
    if let Some(z) = zone {
        request = request.with_zone(z);
    }
    let weather = match seed {
        Some(s) => generate_seeded(&request, s),
        None => generate_for_date(&request, &c),
    };

    let moons = moon_phases(calendar, &c)
        .into_iter()
        .map(|(moon, phase)| {
            let next = (phase.phase_index + 1) % moon.phases.len();
            let days = days_since_reference(calendar, moon, &c) as f64;
            MoonReport {
                name: moon.name.clone(),
                phase: phase.phase(moon).name.clone(),
                sub_phase: phase.sub_phase_name(moon),
                day_in_cycle: phase.day_in_cycle,
                position: phase.position,
                days_until_next_phase: days_until_phase(moon, days, next),
            }
        })
        .collect();

    Ok(InspectReport {
        calendar: calendar.name().to_string(),
        time,
        date: DateReport::new(calendar, &c),
        leap_year: calendar.is_leap_year(c.year),
        era: calendar.era(&c).map(|m| EraReport {
            name: m.era.name.clone(),
            abbreviation: m.era.abbreviation.clone(),
            year_in_era: m.year_in_era,
            fallback: m.fallback,
        }),
        season: season.map(|m| SeasonReport {
            name: m.season.name.clone(),
            fallback: m.fallback,
        }),
        festivals: calendar
            .festivals_on(&c)
            .into_iter()
            .map(|f| f.name.clone())
            .collect(),
        non_counting_day: calendar.is_non_counting_day(&c),
        canonical_hour: calendar.canonical_hour(&c).map(|h| h.name.clone()),
        cycles: calendar
            .cycles_at(&c)
            .into_iter()
            .map(|m| CycleReport {
                name: m.cycle.name.clone(),
                stage: m.stage.name.clone(),
                cycle_number: m.cycle_number,
            })
            .collect(),
        moons,
        zone: zone.map(|z| z.id.clone()),
        sun: SunReport::new(
            &solar_day(calendar, &c, zone),
            is_daytime(calendar, &c, zone),
        ),
        weather: weather.into(),
    })
}
