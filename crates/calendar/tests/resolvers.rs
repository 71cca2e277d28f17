use approx::assert_relative_eq;
use orrery_calendar::{
    CalendarBuilder, CalendarDefinition, CalendarError, ClimateProfile, CycleBasis,
    CycleDefinition, EraDefinition, FestivalDefinition, LeapYearRule, MonthDay, MonthDefinition,
    SeasonDefinition, SeasonSet, TimeComponents, WeekdayDefinition,
};

fn calendar() -> CalendarDefinition {
    CalendarBuilder::new("Resolvers")
        .with_months((1..=8).map(|i| MonthDefinition::new(format!("M{i}"), i, 40)))
        .with_weekdays((1..=8).map(|i| WeekdayDefinition::new(format!("D{i}"))))
        .with_year_zero(700)
        .with_leap_rule(LeapYearRule::custom("+5", 0).unwrap())
        .with_seasons(SeasonSet::dated([
            SeasonDefinition::dated("Thaw", MonthDay::new(2, 0), MonthDay::new(3, 39))
                .with_climate(ClimateProfile::default().with_preset("rain", 3.0)),
            SeasonDefinition::dated("Bloom", MonthDay::new(4, 0), MonthDay::new(5, 39)),
            SeasonDefinition::dated("Ember", MonthDay::new(6, 0), MonthDay::new(1, 39)),
        ]))
        .with_eras([
            EraDefinition::new("First Age", 1).ending(500),
            EraDefinition::new("Second Age", 501),
            EraDefinition::new("Interregnum", 650).ending(710),
        ])
        .with_cycles([
            CycleDefinition::new("Stars", CycleBasis::Year, ["Wolf", "Hawk", "Stag"]).with_length(3),
            CycleDefinition::new("Watch", CycleBasis::EraYear, ["Odd", "Even"]).with_offset(1),
        ])
        .with_festivals([FestivalDefinition::on_month_day("Lanterns", MonthDay::new(6, 0)).with_duration(3)])
        .build()
        .unwrap()
}

#[test]
fn season_wraps_year_boundary() {
    let cal = calendar();
    let at = |m, d| cal.season(&TimeComponents::new(0, m, d)).unwrap();
    assert_eq!(at(0, 0).season.name, "Ember");
    assert_eq!(at(7, 39).season.name, "Ember");
    assert_eq!(at(2, 0).season.name, "Thaw");
    assert_eq!(at(5, 39).season.name, "Bloom");
    assert!(at(2, 0).season.climate.is_some());
}

#[test]
fn later_era_shadows_open_ended_one() {
    let cal = calendar();
    let m = cal.era(&TimeComponents::new(0, 0, 0)).unwrap();
    assert_eq!(m.era.name, "Interregnum");
    assert_eq!(m.year_in_era, 51);
    let m = cal.era(&TimeComponents::new(20, 0, 0)).unwrap();
    assert_eq!(m.era.name, "Second Age");
    assert_eq!(m.year_in_era, 220);
}

#[test]
fn cycles_follow_their_basis() {
    let cal = calendar();
    let matches = cal.cycles_at(&TimeComponents::new(0, 0, 0));
    assert_eq!(matches.len(), 2);
    // Display year 700.
    assert_eq!(matches[0].stage.name, "Hawk");
    assert_eq!(matches[0].cycle_number, 234);
    // Interregnum year 51, plus offset 1.
    assert_eq!(matches[1].stage.name, "Odd");
    assert_eq!(matches[1].cycle.name, "Watch");
}

#[test]
fn festivals_on_day() {
    let cal = calendar();
    let names = |d| {
        cal.festivals_on(&TimeComponents::new(0, 6, d))
            .into_iter()
            .map(|f| f.name.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(0), vec!["Lanterns"]);
    assert_eq!(names(2), vec!["Lanterns"]);
    assert!(names(3).is_empty());
}

#[test]
fn date_parts_combine_resolvers() {
    let cal = calendar();
    let parts = cal.date_parts(&TimeComponents::new(0, 6, 1).with_time(15, 0, 0));
    assert_eq!(parts.year, 700);
    assert_eq!(parts.day, 2);
    assert_eq!(parts.day_of_year, 242);
    assert_eq!(parts.era_name, Some("Interregnum"));
    assert_eq!(parts.season, Some("Ember"));
    assert_eq!(parts.festivals, vec!["Lanterns"]);
    assert_eq!(parts.hour12, 3);
}

#[test]
fn build_reports_first_problem() {
    let err = CalendarBuilder::new("Broken")
        .with_months([MonthDefinition::new("M", 1, 10)])
        .with_weekdays([WeekdayDefinition::new("D")])
        .with_cycles([CycleDefinition::new("Empty", CycleBasis::Day, Vec::<&str>::new())])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        CalendarError::InvalidCycle {
            name: "Empty".to_string(),
            reason: "cycle has no stages".to_string(),
        }
    );
}

fn periodic_calendar(durations: [u32; 2]) -> CalendarDefinition {
    CalendarBuilder::new("Periodic")
        .with_months((1..=8).map(|i| MonthDefinition::new(format!("M{i}"), i, 40)))
        .with_weekdays((1..=8).map(|i| WeekdayDefinition::new(format!("D{i}"))))
        .with_seasons(SeasonSet::periodic(
            300,
            [
                SeasonDefinition::periodic("Wet", Some(durations[0]))
                    .with_climate(ClimateProfile::default().with_temperatures(-2.5, 11.25)),
                SeasonDefinition::periodic("Dry", Some(durations[1])),
            ],
        ))
        .build()
        .unwrap()
}

#[test]
fn periodic_seasons_shorter_than_year_fall_back() {
    let cal = periodic_calendar([30, 30]);
    let at = |m, d| cal.season(&TimeComponents::new(0, m, d)).unwrap();
    // Wet covers days 300..320 and 0..10, Dry covers 10..40.
    assert_eq!(at(7, 20).season.name, "Wet");
    assert_eq!(at(0, 9).season.name, "Wet");
    assert_eq!(at(0, 10).season.name, "Dry");
    assert_eq!(at(0, 39).season.name, "Dry");
    assert!(!at(0, 39).fallback);
    assert!(at(1, 0).fallback);

    let gap = at(3, 0);
    assert!(gap.fallback);
    assert_eq!(gap.season.name, "Wet");
    assert!(at(7, 19).fallback);

    let range = gap.season.climate.as_ref().unwrap().temperatures.unwrap();
    assert_relative_eq!(range.min, -2.5);
    assert_relative_eq!(range.max, 11.25);
}

#[test]
fn periodic_seasons_longer_than_year_never_fall_back() {
    let cal = periodic_calendar([200, 200]);
    for doy in 0..320u32 {
        let m = cal
            .season(&TimeComponents::new(0, (doy / 40) as usize, doy % 40))
            .unwrap();
        assert!(!m.fallback, "day {doy}");
        // Wet starts at 300 and runs 200 days, wrapping to day 180.
        let expected = if doy >= 300 || doy < 180 { "Wet" } else { "Dry" };
        assert_eq!(m.season.name, expected, "day {doy}");
    }
}
