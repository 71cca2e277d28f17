//! Calendar definitions and the validating builder.

use indexmap::IndexMap;

use crate::climate::ClimateZone;
use crate::cycle::CycleDefinition;
use crate::era::EraDefinition;
use crate::error::CalendarError;
use crate::festival::FestivalDefinition;
use crate::layout::YearLayout;
use crate::leap::LeapYearRule;
use crate::moon::MoonDefinition;
use crate::season::SeasonSet;

/// Whether a month takes part in the weekday cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthKind {
    /// An ordinary month.
    #[default]
    Regular,
    /// A month of days outside the weekday cycle.
    Intercalary,
}

/// One month of the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDefinition {
    /// Display name.
    pub name: String,
    /// Short name for compact formats.
    pub abbreviation: Option<String>,
    /// Display ordinal, usually 1-based position.
    pub ordinal: u32,
    /// Days in regular years.
    pub days: u32,
    /// Days in leap years, if different.
    pub leap_days: Option<u32>,
    /// Regular or intercalary.
    pub kind: MonthKind,
    /// Weekday index of the month's first day; restarts the weekday cycle.
    pub starting_weekday: Option<usize>,
    /// Month-specific weekday names, indexed like the calendar's weekdays.
    pub weekday_names: Option<Vec<String>>,
}

impl MonthDefinition {
    /// Creates a regular month.
    pub fn new(name: impl Into<String>, ordinal: u32, days: u32) -> Self {
        Self {
            name: name.into(),
            abbreviation: None,
            ordinal,
            days,
            leap_days: None,
            kind: MonthKind::Regular,
            starting_weekday: None,
            weekday_names: None,
        }
    }

    /// Sets the abbreviation.
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    /// Sets the month length used in leap years.
    pub fn with_leap_days(mut self, days: u32) -> Self {
        self.leap_days = Some(days);
        self
    }

    /// Marks the month as intercalary.
    pub fn intercalary(mut self) -> Self {
        self.kind = MonthKind::Intercalary;
        self
    }

    /// Pins the weekday of the month's first day.
    pub fn with_starting_weekday(mut self, weekday: usize) -> Self {
        self.starting_weekday = Some(weekday);
        self
    }

    /// Overrides the weekday names used inside this month.
    pub fn with_weekday_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.weekday_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Month length for a regular or leap year.
    pub fn days_in(&self, leap: bool) -> u32 {
        if leap {
            self.leap_days.unwrap_or(self.days)
        } else {
            self.days
        }
    }
}

/// One day of the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayDefinition {
    /// Display name.
    pub name: String,
    /// Short name for compact formats.
    pub abbreviation: Option<String>,
    /// Marks a rest day.
    pub rest_day: bool,
}

impl WeekdayDefinition {
    /// Creates a working weekday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: None,
            rest_day: false,
        }
    }

    /// Sets the abbreviation.
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    /// Marks the weekday as a rest day.
    pub fn rest_day(mut self) -> Self {
        self.rest_day = true;
        self
    }
}

/// A 0-based month index and 0-based day within that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    /// 0-based month index.
    pub month: usize,
    /// 0-based day of month.
    pub day: u32,
}

impl MonthDay {
    /// Creates a month/day pair.
    pub const fn new(month: usize, day: u32) -> Self {
        Self { month, day }
    }
}

/// Sub-day units of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeUnits {
    /// Hours in one day.
    pub hours_per_day: u32,
    /// Minutes in one hour.
    pub minutes_per_hour: u32,
    /// Seconds in one minute.
    pub seconds_per_minute: u32,
}

impl TimeUnits {
    /// Creates a set of time units.
    pub const fn new(hours_per_day: u32, minutes_per_hour: u32, seconds_per_minute: u32) -> Self {
        Self {
            hours_per_day,
            minutes_per_hour,
            seconds_per_minute,
        }
    }

    /// Seconds in one hour.
    pub fn seconds_per_hour(&self) -> i64 {
        i64::from(self.minutes_per_hour) * i64::from(self.seconds_per_minute)
    }

    /// Seconds in one day.
    pub fn seconds_per_day(&self) -> i64 {
        i64::from(self.hours_per_day) * self.seconds_per_hour()
    }

    fn validate(&self) -> Result<(), CalendarError> {
        if self.hours_per_day == 0 || self.minutes_per_hour == 0 || self.seconds_per_minute == 0 {
            return Err(CalendarError::InvalidTimeUnits {
                hours_per_day: self.hours_per_day,
                minutes_per_hour: self.minutes_per_hour,
                seconds_per_minute: self.seconds_per_minute,
            });
        }
        Ok(())
    }
}

impl Default for TimeUnits {
    fn default() -> Self {
        Self::new(24, 60, 60)
    }
}

/// A named division of the day, such as a monastic hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalHour {
    /// Display name.
    pub name: String,
    /// Short name for compact formats.
    pub abbreviation: Option<String>,
    /// First hour covered.
    pub start_hour: u32,
    /// Hour at which the period ends (exclusive). Wraps past midnight when
    /// smaller than `start_hour`.
    pub end_hour: u32,
}

impl CanonicalHour {
    /// Creates a canonical hour spanning `start_hour..end_hour`.
    pub fn new(name: impl Into<String>, start_hour: u32, end_hour: u32) -> Self {
        Self {
            name: name.into(),
            abbreviation: None,
            start_hour,
            end_hour,
        }
    }

    /// Sets the abbreviation.
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    /// Whether `hour` falls inside this period.
    pub fn contains(&self, hour: u32) -> bool {
        if self.start_hour <= self.end_hour {
            (self.start_hour..self.end_hour).contains(&hour)
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }

    fn validate(&self, hours_per_day: u32) -> Result<(), CalendarError> {
        if self.start_hour >= hours_per_day || self.end_hour > hours_per_day {
            return Err(CalendarError::InvalidCanonicalHour {
                name: self.name.clone(),
                reason: format!(
                    "span {}..{} exceeds a {hours_per_day}-hour day",
                    self.start_hour, self.end_hour
                ),
            });
        }
        Ok(())
    }
}

/// Calendar-wide daylight curve between the solstices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaylightConfig {
    /// Whether the curve is used at all.
    pub enabled: bool,
    /// Daylight hours at the winter solstice.
    pub shortest_day: f64,
    /// Daylight hours at the summer solstice.
    pub longest_day: f64,
    /// 0-based day of year of the winter solstice. Defaults to day 0.
    pub winter_solstice: Option<u32>,
    /// 0-based day of year of the summer solstice. Defaults to mid-year.
    pub summer_solstice: Option<u32>,
}

impl DaylightConfig {
    /// Creates an enabled curve between the given day lengths.
    pub fn curve(shortest_day: f64, longest_day: f64) -> Self {
        Self {
            enabled: true,
            shortest_day,
            longest_day,
            ..Self::default()
        }
    }

    /// Pins the solstice days.
    pub fn with_solstices(mut self, winter: u32, summer: u32) -> Self {
        self.winter_solstice = Some(winter);
        self.summer_solstice = Some(summer);
        self
    }

    /// Winter and summer solstice days for a year of `days_in_year` days.
    pub fn solstices(&self, days_in_year: u32) -> (u32, u32) {
        let days = days_in_year.max(1);
        let winter = self.winter_solstice.unwrap_or(0) % days;
        let summer = self.summer_solstice.unwrap_or(days / 2) % days;
        (winter, summer)
    }

    fn validate(&self, hours_per_day: u32) -> Result<(), CalendarError> {
        if !self.enabled {
            return Ok(());
        }
        let hpd = f64::from(hours_per_day);
        let in_day = |h: f64| h.is_finite() && (0.0..=hpd).contains(&h);
        if !in_day(self.shortest_day) || !in_day(self.longest_day) {
            return Err(CalendarError::InvalidDaylight {
                reason: format!("day lengths must lie within 0..={hpd} hours"),
            });
        }
        if self.shortest_day > self.longest_day {
            return Err(CalendarError::InvalidDaylight {
                reason: format!(
                    "shortest day {} exceeds longest day {}",
                    self.shortest_day, self.longest_day
                ),
            });
        }
        Ok(())
    }
}

impl Default for DaylightConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            shortest_day: 8.0,
            longest_day: 16.0,
            winter_solstice: None,
            summer_solstice: None,
        }
    }
}

/// Builder for [`CalendarDefinition`].
///
/// # Example
///
/// ```
/// use orrery_calendar::{CalendarBuilder, LeapYearRule, MonthDefinition, WeekdayDefinition};
///
/// let calendar = CalendarBuilder::new("Twelve Thirties")
///     .with_months((1..=12).map(|i| MonthDefinition::new(format!("Month {i}"), i, 30)))
///     .with_weekdays((1..=6).map(|i| WeekdayDefinition::new(format!("Day {i}"))))
///     .with_leap_rule(LeapYearRule::Simple { interval: 4, start: 0 })
///     .build()
///     .unwrap();
///
/// assert_eq!(calendar.days_in_year(1), 360);
/// ```
#[derive(Debug, Clone)]
pub struct CalendarBuilder {
    name: String,
    months: Vec<MonthDefinition>,
    weekdays: Vec<WeekdayDefinition>,
    first_weekday: usize,
    time: TimeUnits,
    year_zero: i64,
    has_year_zero: bool,
    leap_rule: LeapYearRule,
    festivals: Vec<FestivalDefinition>,
    seasons: SeasonSet,
    moons: Vec<MoonDefinition>,
    eras: Vec<EraDefinition>,
    cycles: Vec<CycleDefinition>,
    canonical_hours: Vec<CanonicalHour>,
    climate_zones: Vec<ClimateZone>,
    daylight: DaylightConfig,
}

impl CalendarBuilder {
    /// Creates an empty builder with 24/60/60 time units and a year zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            months: Vec::new(),
            weekdays: Vec::new(),
            first_weekday: 0,
            time: TimeUnits::default(),
            year_zero: 0,
            has_year_zero: true,
            leap_rule: LeapYearRule::None,
            festivals: Vec::new(),
            seasons: SeasonSet::default(),
            moons: Vec::new(),
            eras: Vec::new(),
            cycles: Vec::new(),
            canonical_hours: Vec::new(),
            climate_zones: Vec::new(),
            daylight: DaylightConfig::default(),
        }
    }

    /// Sets the months in calendar order.
    pub fn with_months(mut self, months: impl IntoIterator<Item = MonthDefinition>) -> Self {
        self.months = months.into_iter().collect();
        self
    }

    /// Sets the weekdays in cycle order.
    pub fn with_weekdays(mut self, weekdays: impl IntoIterator<Item = WeekdayDefinition>) -> Self {
        self.weekdays = weekdays.into_iter().collect();
        self
    }

    /// Sets the weekday index of the epoch's first day.
    pub fn with_first_weekday(mut self, index: usize) -> Self {
        self.first_weekday = index;
        self
    }

    /// Sets the sub-day units.
    pub fn with_time_units(mut self, time: TimeUnits) -> Self {
        self.time = time;
        self
    }

    /// Sets the display-year offset of internal year 0.
    pub fn with_year_zero(mut self, year_zero: i64) -> Self {
        self.year_zero = year_zero;
        self
    }

    /// Declares whether display year 0 exists.
    pub fn with_has_year_zero(mut self, exists: bool) -> Self {
        self.has_year_zero = exists;
        self
    }

    /// Sets the leap-year rule.
    pub fn with_leap_rule(mut self, rule: LeapYearRule) -> Self {
        self.leap_rule = rule;
        self
    }

    /// Sets the festivals.
    pub fn with_festivals(mut self, festivals: impl IntoIterator<Item = FestivalDefinition>) -> Self {
        self.festivals = festivals.into_iter().collect();
        self
    }

    /// Sets the seasons.
    pub fn with_seasons(mut self, seasons: SeasonSet) -> Self {
        self.seasons = seasons;
        self
    }

    /// Sets the moons.
    pub fn with_moons(mut self, moons: impl IntoIterator<Item = MoonDefinition>) -> Self {
        self.moons = moons.into_iter().collect();
        self
    }

    /// Sets the eras.
    pub fn with_eras(mut self, eras: impl IntoIterator<Item = EraDefinition>) -> Self {
        self.eras = eras.into_iter().collect();
        self
    }

    /// Sets the named cycles.
    pub fn with_cycles(mut self, cycles: impl IntoIterator<Item = CycleDefinition>) -> Self {
        self.cycles = cycles.into_iter().collect();
        self
    }

    /// Sets the canonical hours.
    pub fn with_canonical_hours(mut self, hours: impl IntoIterator<Item = CanonicalHour>) -> Self {
        self.canonical_hours = hours.into_iter().collect();
        self
    }

    /// Sets the climate zones. Zone ids must be unique.
    pub fn with_climate_zones(mut self, zones: impl IntoIterator<Item = ClimateZone>) -> Self {
        self.climate_zones = zones.into_iter().collect();
        self
    }

    /// Sets the calendar-wide daylight curve.
    pub fn with_daylight(mut self, daylight: DaylightConfig) -> Self {
        self.daylight = daylight;
        self
    }

    /// Validates the definition and resolves all defaults.
    ///
    /// # Errors
    ///
    /// Returns the first [`CalendarError`] found: missing months or
    /// weekdays, zero time units, out-of-range weekday indices, an invalid
    /// leap rule, empty years, or a malformed festival, season, moon, era,
    /// cycle, canonical hour, climate zone or daylight curve.
    pub fn build(self) -> Result<CalendarDefinition, CalendarError> {
        if self.months.is_empty() {
            return Err(CalendarError::NoMonths);
        }
        if self.weekdays.is_empty() {
            return Err(CalendarError::NoWeekdays);
        }
        self.time.validate()?;

        let weekday_count = self.weekdays.len();
        if self.first_weekday >= weekday_count {
            return Err(CalendarError::InvalidFirstWeekday {
                index: self.first_weekday,
                count: weekday_count,
            });
        }
        for month in &self.months {
            if let Some(index) = month.starting_weekday.filter(|&i| i >= weekday_count) {
                return Err(CalendarError::InvalidStartingWeekday {
                    month: month.name.clone(),
                    index,
                    count: weekday_count,
                });
            }
        }

        self.leap_rule.validate()?;
        for festival in &self.festivals {
            festival.validate(self.months.len())?;
        }

        let regular_layout = YearLayout::new(&self.months, &self.festivals, false);
        let leap_layout = YearLayout::new(&self.months, &self.festivals, true);
        if regular_layout.days() == 0 {
            return Err(CalendarError::EmptyYear { kind: "regular" });
        }
        if self.leap_rule != LeapYearRule::None && leap_layout.days() == 0 {
            return Err(CalendarError::EmptyYear { kind: "leap" });
        }

        self.seasons.validate(&self.months)?;

        let mut moons = self.moons;
        for moon in &mut moons {
            moon.resolve_defaults();
            moon.validate(self.months.len())?;
        }

        for era in &self.eras {
            era.validate()?;
        }
        let mut era_order: Vec<usize> = (0..self.eras.len()).collect();
        era_order.sort_by(|&a, &b| self.eras[b].start_year.cmp(&self.eras[a].start_year));

        for cycle in &self.cycles {
            cycle.validate()?;
        }
        for hour in &self.canonical_hours {
            hour.validate(self.time.hours_per_day)?;
        }
        self.daylight.validate(self.time.hours_per_day)?;

        let mut climate_zones = IndexMap::with_capacity(self.climate_zones.len());
        for zone in self.climate_zones {
            zone.validate(self.time.hours_per_day)?;
            if climate_zones.contains_key(&zone.id) {
                return Err(CalendarError::InvalidClimateZone {
                    id: zone.id,
                    reason: "duplicate zone id".to_string(),
                });
            }
            climate_zones.insert(zone.id.clone(), zone);
        }

        Ok(CalendarDefinition {
            name: self.name,
            months: self.months,
            weekdays: self.weekdays,
            first_weekday: self.first_weekday,
            time: self.time,
            year_zero: self.year_zero,
            has_year_zero: self.has_year_zero,
            leap_rule: self.leap_rule,
            festivals: self.festivals,
            seasons: self.seasons,
            moons,
            eras: self.eras,
            era_order,
            cycles: self.cycles,
            canonical_hours: self.canonical_hours,
            climate_zones,
            daylight: self.daylight,
            regular_layout,
            leap_layout,
        })
    }
}

/// A validated, immutable calendar.
///
/// Built with [`CalendarBuilder`]. Every resolver in the workspace reads a
/// `CalendarDefinition` and never mutates it, so a single definition can be
/// shared freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDefinition {
    name: String,
    months: Vec<MonthDefinition>,
    weekdays: Vec<WeekdayDefinition>,
    first_weekday: usize,
    time: TimeUnits,
    year_zero: i64,
    has_year_zero: bool,
    leap_rule: LeapYearRule,
    festivals: Vec<FestivalDefinition>,
    seasons: SeasonSet,
    moons: Vec<MoonDefinition>,
    eras: Vec<EraDefinition>,
    era_order: Vec<usize>,
    cycles: Vec<CycleDefinition>,
    canonical_hours: Vec<CanonicalHour>,
    climate_zones: IndexMap<String, ClimateZone>,
    daylight: DaylightConfig,
    regular_layout: YearLayout,
    leap_layout: YearLayout,
}

impl CalendarDefinition {
    /// Calendar name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Months in calendar order.
    pub fn months(&self) -> &[MonthDefinition] {
        &self.months
    }

    /// Month by 0-based index.
    pub fn month(&self, index: usize) -> Option<&MonthDefinition> {
        self.months.get(index)
    }

    /// Weekdays in cycle order.
    pub fn weekdays(&self) -> &[WeekdayDefinition] {
        &self.weekdays
    }

    /// Number of days in the weekday cycle.
    pub fn weekday_count(&self) -> usize {
        self.weekdays.len()
    }

    /// Weekday index of the epoch's first day.
    pub fn first_weekday(&self) -> usize {
        self.first_weekday
    }

    /// Sub-day units.
    pub fn time_units(&self) -> TimeUnits {
        self.time
    }

    /// Display year of internal year 0.
    pub fn year_zero(&self) -> i64 {
        self.year_zero
    }

    /// Whether display year 0 exists.
    pub fn has_year_zero(&self) -> bool {
        self.has_year_zero
    }

    /// Leap-year rule.
    pub fn leap_rule(&self) -> &LeapYearRule {
        &self.leap_rule
    }

    /// Festivals.
    pub fn festivals(&self) -> &[FestivalDefinition] {
        &self.festivals
    }

    /// Seasons.
    pub fn seasons(&self) -> &SeasonSet {
        &self.seasons
    }

    /// Moons, with default phases resolved.
    pub fn moons(&self) -> &[MoonDefinition] {
        &self.moons
    }

    /// Eras in definition order.
    pub fn eras(&self) -> &[EraDefinition] {
        &self.eras
    }

    /// Era indices sorted by start year, latest first.
    pub(crate) fn era_order(&self) -> &[usize] {
        &self.era_order
    }

    /// Named cycles.
    pub fn cycles(&self) -> &[CycleDefinition] {
        &self.cycles
    }

    /// Canonical hours.
    pub fn canonical_hours(&self) -> &[CanonicalHour] {
        &self.canonical_hours
    }

    /// Climate zones keyed by id, in definition order.
    pub fn climate_zones(&self) -> &IndexMap<String, ClimateZone> {
        &self.climate_zones
    }

    /// Climate zone by id.
    pub fn climate_zone(&self, id: &str) -> Option<&ClimateZone> {
        self.climate_zones.get(id)
    }

    /// Calendar-wide daylight curve.
    pub fn daylight(&self) -> &DaylightConfig {
        &self.daylight
    }

    /// Converts an internal year to a display year.
    pub fn display_year(&self, year: i32) -> i64 {
        i64::from(year) + self.year_zero
    }

    /// Converts a display year to an internal year.
    ///
    /// Internal years are `i32`; display years further from `year_zero`
    /// than that are clamped to `i32::MIN` or `i32::MAX`.
    pub fn internal_year(&self, display_year: i64) -> i32 {
        display_year
            .saturating_sub(self.year_zero)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// Whether internal year `year` is a leap year.
    pub fn is_leap_year(&self, year: i32) -> bool {
        self.leap_rule
            .is_leap_year(self.display_year(year), self.has_year_zero)
    }

    pub(crate) fn layout(&self, year: i32) -> &YearLayout {
        if self.is_leap_year(year) {
            &self.leap_layout
        } else {
            &self.regular_layout
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::climate::ClimateZone;
    use crate::moon::MoonDefinition;

    fn builder() -> CalendarBuilder {
        CalendarBuilder::new("Test")
            .with_months([
                MonthDefinition::new("First", 1, 30),
                MonthDefinition::new("Second", 2, 30),
            ])
            .with_weekdays([WeekdayDefinition::new("A"), WeekdayDefinition::new("B")])
    }

    #[test]
    fn build_minimal() {
        let cal = builder().build().unwrap();
        assert_eq!(cal.name(), "Test");
        assert_eq!(cal.months().len(), 2);
        assert_eq!(cal.weekday_count(), 2);
        assert_eq!(cal.time_units(), TimeUnits::new(24, 60, 60));
        assert!(cal.has_year_zero());
        assert!(!cal.is_leap_year(4));
    }

    #[test]
    fn build_rejects_no_months() {
        let err = CalendarBuilder::new("Empty")
            .with_weekdays([WeekdayDefinition::new("A")])
            .build()
            .unwrap_err();
        assert_eq!(err, CalendarError::NoMonths);
    }

    #[test]
    fn build_rejects_no_weekdays() {
        let err = CalendarBuilder::new("Empty")
            .with_months([MonthDefinition::new("Only", 1, 10)])
            .build()
            .unwrap_err();
        assert_eq!(err, CalendarError::NoWeekdays);
    }

    #[test]
    fn build_rejects_zero_time_units() {
        let err = builder()
            .with_time_units(TimeUnits::new(24, 0, 60))
            .build()
            .unwrap_err();
        assert!(matches!(err, CalendarError::InvalidTimeUnits { .. }));
    }

    #[test]
    fn build_rejects_empty_year() {
        let err = CalendarBuilder::new("Void")
            .with_months([MonthDefinition::new("Nothing", 1, 0)])
            .with_weekdays([WeekdayDefinition::new("A")])
            .build()
            .unwrap_err();
        assert_eq!(err, CalendarError::EmptyYear { kind: "regular" });
    }

    #[test]
    fn build_rejects_bad_first_weekday() {
        let err = builder().with_first_weekday(2).build().unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidFirstWeekday { index: 2, count: 2 }
        );
    }

    #[test]
    fn build_rejects_bad_starting_weekday() {
        let err = builder()
            .with_months([MonthDefinition::new("Odd", 1, 10).with_starting_weekday(5)])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CalendarError::InvalidStartingWeekday { index: 5, .. }
        ));
    }

    #[test]
    fn build_rejects_zero_leap_interval() {
        let err = builder()
            .with_leap_rule(LeapYearRule::Simple {
                interval: 0,
                start: 0,
            })
            .build()
            .unwrap_err();
        assert_eq!(err, CalendarError::InvalidLeapInterval { interval: 0 });
    }

    #[test]
    fn build_rejects_duplicate_zones() {
        let err = builder()
            .with_climate_zones([ClimateZone::new("temperate"), ClimateZone::new("temperate")])
            .build()
            .unwrap_err();
        assert!(matches!(err, CalendarError::InvalidClimateZone { .. }));
    }

    #[test]
    fn build_rejects_inverted_daylight_curve() {
        let err = builder()
            .with_daylight(DaylightConfig::curve(16.0, 8.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDaylight { .. }));
    }

    #[test]
    fn build_resolves_default_moon_phases() {
        let cal = builder()
            .with_moons([MoonDefinition::new("Luna", 29.5).with_phases(Vec::new())])
            .build()
            .unwrap();
        assert_eq!(cal.moons()[0].phases.len(), 8);
    }

    #[test]
    fn display_year_offset() {
        let cal = builder().with_year_zero(1488).build().unwrap();
        assert_eq!(cal.display_year(0), 1488);
        assert_eq!(cal.display_year(-10), 1478);
        assert_eq!(cal.internal_year(1500), 12);
        assert_eq!(cal.internal_year(i64::MAX), i32::MAX);
        assert_eq!(cal.internal_year(i64::MIN), i32::MIN);
        assert_eq!(cal.internal_year(1488 + i64::from(i32::MAX) + 5), i32::MAX);
    }

    #[test]
    fn leap_rule_uses_display_year() {
        let cal = builder()
            .with_year_zero(2)
            .with_leap_rule(LeapYearRule::Simple {
                interval: 4,
                start: 0,
            })
            .build()
            .unwrap();
        assert!(cal.is_leap_year(2));
        assert!(!cal.is_leap_year(0));
    }

    #[test]
    fn canonical_hour_wraps_midnight() {
        let vigil = CanonicalHour::new("Vigil", 22, 2);
        assert!(vigil.contains(23));
        assert!(vigil.contains(1));
        assert!(!vigil.contains(2));
        assert!(!vigil.contains(12));
    }

    #[test]
    fn daylight_solstice_defaults() {
        let cfg = DaylightConfig::curve(8.0, 16.0);
        assert_eq!(cfg.solstices(360), (0, 180));
        let pinned = cfg.with_solstices(355, 172);
        assert_eq!(pinned.solstices(365), (355, 172));
    }

    #[test]
    fn month_days_in_leap() {
        let month = MonthDefinition::new("Flex", 2, 28).with_leap_days(29);
        assert_eq!(month.days_in(false), 28);
        assert_eq!(month.days_in(true), 29);
    }
}
