//! Forecast command: date-seeded weather for consecutive days.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use orrery_weather::forecast;

use crate::cli::ForecastArgs;
use crate::report::{self, ForecastDayReport, ForecastReport};
use crate::session::Session;

/// Run the forecast command.
pub fn run(args: ForecastArgs) -> Result<()> {
    let _cmd = info_span!("forecast").entered();
    let session = Session::load(&args.config)?;
    let report = build(&session, args.time, args.days, args.zone.as_deref())?;
    info!(days = report.days.len(), "forecast complete");
    report::print_json(&report)
}

/// Forecasts `days` days starting on the day containing `time`.
pub fn build(
    session: &Session,
    time: i64,
    days: usize,
    zone: Option<&str>,
) -> Result<ForecastReport> {
    let calendar = &session.calendar;
    let start = session.converter().time_to_components(time).start_of_day();
    let out = forecast(calendar, &start, days, zone, Some(&session.catalog))
        .with_context(|| format!("failed to forecast {days} days"))?;

    Ok(ForecastReport {
        calendar: calendar.name().to_string(),
        zone: zone.map(str::to_string),
        days: out
            .into_iter()
            .map(|day| ForecastDayReport::new(calendar, day))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::sample_session;

    #[test]
    fn forecast_is_repeatable() {
        let session = sample_session();
        let time = 86_400 * 100 + 3_600;
        let a = build(&session, time, 10, Some("northreach")).unwrap();
        let b = build(&session, time, 10, Some("northreach")).unwrap();
        assert_eq!(a.days.len(), 10);
        assert_eq!(a.days[0].date.hour, 0);
        for (x, y) in a.days.iter().zip(&b.days) {
            assert_eq!(x.weather.preset, y.weather.preset);
            assert_eq!(x.weather.temperature, y.weather.temperature);
        }
    }

    #[test]
    fn disabled_storm_never_appears() {
        let session = sample_session();
        // Summer starts on day 150.
        let report = build(&session, 86_400 * 150, 90, Some("northreach")).unwrap();
        assert!(report.days.iter().all(|d| d.season.as_deref() == Some("Summer")));
        assert!(report.days.iter().all(|d| d.weather.preset != "storm"));
        // The season's own range outranks the zone's per-season table.
        assert!(
            report
                .days
                .iter()
                .all(|d| (16.0..=30.0).contains(&d.weather.temperature))
        );
    }

    #[test]
    fn crosses_year_end() {
        let session = sample_session();
        let report = build(&session, 86_400 * 360, 8, None).unwrap();
        assert_eq!(report.days[0].date.month_name, "Year's End");
        assert_eq!(report.days[6].date.year, 1);
        assert_eq!((report.days[6].date.month, report.days[6].date.day), (1, 1));
    }

    #[test]
    fn unknown_zone_is_an_error() {
        let session = sample_session();
        let err = build(&session, 0, 3, Some("atlantis")).unwrap_err();
        assert!(format!("{err:#}").contains("atlantis"));
    }
}
