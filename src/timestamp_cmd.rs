//! Timestamp command: convert a calendar date into seconds since the epoch.

use anyhow::Result;
use tracing::info_span;

use crate::cli::TimestampArgs;
use crate::convert;
use crate::report::{self, DateReport, TimestampReport};
use crate::session::Session;

/// Run the timestamp command.
pub fn run(args: TimestampArgs) -> Result<()> {
    let _cmd = info_span!("timestamp").entered();
    let session = Session::load(&args.config)?;
    let report = timestamp(
        &session,
        args.year,
        args.month,
        args.day,
        (args.hour, args.minute, args.second),
    )?;
    report::print_json(&report)
}

/// Converts a display year with 1-based month and day.
pub fn timestamp(
    session: &Session,
    year: i64,
    month: usize,
    day: u32,
    time_of_day: (u32, u32, u32),
) -> Result<TimestampReport> {
    let c = convert::build_components(&session.calendar, year, month, day, time_of_day)?;
    Ok(TimestampReport {
        calendar: session.calendar.name().to_string(),
        time: session.converter().components_to_time(&c),
        date: DateReport::new(&session.calendar, &c),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect_cmd::inspect;
    use crate::session::sample_session;

    #[test]
    fn epoch_and_round_trip() {
        let session = sample_session();
        let r = timestamp(&session, 0, 1, 1, (0, 0, 0)).unwrap();
        assert_eq!(r.time, 0);

        let r = timestamp(&session, 1492, 7, 1, (18, 30, 15)).unwrap();
        let back = inspect(&session, r.time, None, None).unwrap();
        assert_eq!(back.date.year, 1492);
        assert_eq!((back.date.month, back.date.day), (7, 1));
        assert_eq!((back.date.hour, back.date.minute, back.date.second), (18, 30, 15));
        assert_eq!(back.festivals, ["Midsummer Night"]);
    }

    #[test]
    fn negative_years() {
        let session = sample_session();
        let r = timestamp(&session, -1, 1, 1, (0, 0, 0)).unwrap();
        assert!(r.time < 0);
        assert_eq!(r.date.year, -1);
    }

    #[test]
    fn rejects_bad_dates() {
        let session = sample_session();
        assert!(timestamp(&session, 3, 1, 31, (0, 0, 0)).is_err());
        assert!(timestamp(&session, 3, 14, 1, (0, 0, 0)).is_err());
        assert!(timestamp(&session, 3, 1, 1, (24, 0, 0)).is_err());
    }
}
