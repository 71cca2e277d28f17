use orrery_calendar::{
    CalendarBuilder, CalendarDefinition, FestivalDefinition, LeapYearRule, MonthDay,
    MonthDefinition, TimeComponents, WeekdayDefinition, day_sequence,
};

fn weekdays(n: usize) -> impl Iterator<Item = WeekdayDefinition> {
    (0..n).map(|i| WeekdayDefinition::new(format!("W{i}")))
}

fn twelve_thirties(festivals: Vec<FestivalDefinition>) -> CalendarDefinition {
    CalendarBuilder::new("Twelve Thirties")
        .with_months((1..=12).map(|i| MonthDefinition::new(format!("Month {i}"), i, 30)))
        .with_weekdays(weekdays(7))
        .with_leap_rule(LeapYearRule::Simple {
            interval: 4,
            start: 0,
        })
        .with_festivals(festivals)
        .build()
        .unwrap()
}

fn on_doy(cal: &CalendarDefinition, year: i32, doy: u32) -> TimeComponents {
    cal.date_from_day_number(cal.days_before_year(year) + i64::from(doy))
}

#[test]
fn skipped_festival_day_does_not_advance_weekday() {
    let cal = twelve_thirties(vec![FestivalDefinition::on_day_of_year("Feast", 100).skips_weekday()]);
    let n = cal.weekday_count();
    for year in [-3, 0, 1, 7] {
        let wd99 = cal.weekday_index(&on_doy(&cal, year, 99));
        let wd101 = cal.weekday_index(&on_doy(&cal, year, 101));
        assert_eq!(wd101, (wd99 + 1) % n, "year {year}");
        assert!(cal.is_non_counting_day(&on_doy(&cal, year, 100)));
    }
}

#[test]
fn counting_festival_advances_weekday() {
    let cal = twelve_thirties(vec![FestivalDefinition::on_day_of_year("Fair", 100)]);
    let wd99 = cal.weekday_index(&on_doy(&cal, 0, 99));
    let wd101 = cal.weekday_index(&on_doy(&cal, 0, 101));
    assert_eq!(wd101, (wd99 + 2) % 7);
}

#[test]
fn weekday_monotonic_except_non_counting_days() {
    let cal = CalendarBuilder::new("Mixed")
        .with_months([
            MonthDefinition::new("A", 1, 20),
            MonthDefinition::new("Gap", 2, 2).intercalary(),
            MonthDefinition::new("B", 3, 20),
            MonthDefinition::new("Leap", 4, 0).with_leap_days(1).intercalary(),
            MonthDefinition::new("C", 5, 20),
        ])
        .with_weekdays(weekdays(6))
        .with_first_weekday(4)
        .with_leap_rule(LeapYearRule::custom("3,!9", 0).unwrap())
        .with_festivals([
            FestivalDefinition::on_month_day("Rest", MonthDay::new(2, 10))
                .with_duration(2)
                .skips_weekday(),
            FestivalDefinition::on_month_day("Market", MonthDay::new(4, 5)),
        ])
        .build()
        .unwrap();

    let n = cal.weekday_count();
    let dates = day_sequence(&cal, TimeComponents::new(-20, 0, 0), 2_000);
    let mut previous_counting: Option<usize> = None;
    for date in &dates {
        let wd = cal.weekday_index(date);
        assert!(wd < n);
        if cal.is_non_counting_day(date) {
            continue;
        }
        if let Some(prev) = previous_counting {
            assert_eq!(wd, (prev + 1) % n, "weekday did not advance by one at {date:?}");
        }
        previous_counting = Some(wd);
    }
}

#[test]
fn non_counting_day_shares_next_counting_weekday() {
    let cal = twelve_thirties(vec![
        FestivalDefinition::on_day_of_year("Long Feast", 40)
            .with_duration(3)
            .skips_weekday(),
    ]);
    let after = cal.weekday_index(&on_doy(&cal, 2, 43));
    for doy in 40..43 {
        assert_eq!(cal.weekday_index(&on_doy(&cal, 2, doy)), after);
    }
}

#[test]
fn first_weekday_sets_epoch() {
    let cal = CalendarBuilder::new("Shifted")
        .with_months([MonthDefinition::new("Only", 1, 30)])
        .with_weekdays(weekdays(7))
        .with_first_weekday(6)
        .build()
        .unwrap();
    assert_eq!(cal.weekday_index(&TimeComponents::new(0, 0, 0)), 6);
    assert_eq!(cal.weekday_index(&TimeComponents::new(0, 0, 1)), 0);
    assert_eq!(cal.weekday(&TimeComponents::new(0, 0, 1)).name, "W0");
}
