//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use orrery_calendar::{
    CalendarBuilder, CalendarDefinition, CanonicalHour, ClimateProfile, ClimateZone,
    CycleBasis, CycleDefinition, DaylightConfig, EraDefinition, FestivalDefinition,
    LeapYearRule, MonthDay, MonthDefinition, MoonDefinition, PhaseDefinition, ReferenceDate,
    SeasonDefinition, SeasonOverride, SeasonSet, TimeComponents, TimeUnits, WeekdayDefinition,
    ZonePreset,
};
use orrery_weather::{WeatherCatalog, WeatherPreset};

use crate::config::*;

/// Converts a 1-based position into a 0-based index.
fn zero_based(value: u32, what: &str) -> Result<u32> {
    match value.checked_sub(1) {
        Some(v) => Ok(v),
        None => bail!("{what} is 1-based, got 0"),
    }
}

/// Converts a 1-based month and day into a [`MonthDay`].
pub fn parse_date(date: &DateToml) -> Result<MonthDay> {
    if date.month == 0 {
        bail!("month is 1-based, got 0");
    }
    Ok(MonthDay::new(date.month - 1, zero_based(date.day, "day")?))
}

/// Parses a leap rule section into a [`LeapYearRule`].
pub fn parse_leap_rule(leap: &LeapToml) -> Result<LeapYearRule> {
    match leap.rule.to_lowercase().as_str() {
        "none" => Ok(LeapYearRule::None),
        "gregorian" => Ok(LeapYearRule::Gregorian),
        "simple" => {
            let Some(interval) = leap.interval else {
                bail!("simple leap rule needs an interval");
            };
            Ok(LeapYearRule::Simple {
                interval,
                start: leap.start,
            })
        }
        "custom" => {
            let Some(pattern) = leap.pattern.as_deref() else {
                bail!("custom leap rule needs a pattern");
            };
            LeapYearRule::custom(pattern, leap.start)
                .with_context(|| format!("invalid leap pattern {pattern:?}"))
        }
        other => bail!("unknown leap rule: {other:?}"),
    }
}

/// Parses a cycle basis name into the corresponding enum variant.
pub fn parse_cycle_basis(s: &str) -> Result<CycleBasis> {
    match s.to_lowercase().as_str() {
        "year" => Ok(CycleBasis::Year),
        "era_year" => Ok(CycleBasis::EraYear),
        "month" => Ok(CycleBasis::Month),
        "month_day" => Ok(CycleBasis::MonthDay),
        "day" => Ok(CycleBasis::Day),
        "year_day" => Ok(CycleBasis::YearDay),
        other => bail!("unknown cycle basis: {other:?}"),
    }
}

fn build_month(m: &MonthToml) -> MonthDefinition {
    // Ordinal is set from the month's position by `build_calendar`.
    let mut month = MonthDefinition::new(&m.name, 0, m.days);
    if let Some(a) = &m.abbreviation {
        month = month.with_abbreviation(a);
    }
    if let Some(d) = m.leap_days {
        month = month.with_leap_days(d);
    }
    if m.intercalary {
        month = month.intercalary();
    }
    if let Some(w) = m.starting_weekday {
        month = month.with_starting_weekday(w);
    }
    if let Some(names) = &m.weekday_names {
        month = month.with_weekday_names(names);
    }
    month
}

fn build_weekday(w: &WeekdayToml) -> WeekdayDefinition {
    let mut day = WeekdayDefinition::new(&w.name);
    if let Some(a) = &w.abbreviation {
        day = day.with_abbreviation(a);
    }
    if w.rest_day {
        day = day.rest_day();
    }
    day
}

/// Builds a [`FestivalDefinition`]. Exactly one of `day_of_year` or
/// `date` must be set.
pub fn build_festival(f: &FestivalToml) -> Result<FestivalDefinition> {
    let mut festival = match (f.day_of_year, &f.date) {
        (Some(doy), None) => {
            FestivalDefinition::on_day_of_year(&f.name, zero_based(doy, "day_of_year")?)
        }
        (None, Some(date)) => FestivalDefinition::on_month_day(&f.name, parse_date(date)?),
        (Some(_), Some(_)) => bail!("festival {:?} has both day_of_year and date", f.name),
        (None, None) => bail!("festival {:?} needs day_of_year or date", f.name),
    }
    .with_duration(f.duration);
    if let Some(d) = f.leap_duration {
        festival = festival.with_leap_duration(d);
    }
    if f.leap_year_only {
        festival = festival.leap_year_only();
    }
    if !f.counts_for_weekday {
        festival = festival.skips_weekday();
    }
    Ok(festival)
}

fn build_climate(
    temperature: Option<[f64; 2]>,
    presets: &indexmap::IndexMap<String, f64>,
) -> Option<ClimateProfile> {
    if temperature.is_none() && presets.is_empty() {
        return None;
    }
    let mut climate = ClimateProfile::default();
    if let Some([min, max]) = temperature {
        climate = climate.with_temperatures(min, max);
    }
    for (id, &chance) in presets {
        climate = climate.with_preset(id, chance);
    }
    Some(climate)
}

/// Builds a [`SeasonSet`] from the seasons section.
pub fn build_seasons(seasons: &SeasonsToml) -> Result<SeasonSet> {
    let periodic = match seasons.mode.to_lowercase().as_str() {
        "dated" => false,
        "periodic" => true,
        other => bail!("unknown season mode: {other:?}"),
    };

    let mut list = Vec::with_capacity(seasons.list.len());
    for s in &seasons.list {
        let mut season = if periodic {
            SeasonDefinition::periodic(&s.name, s.duration)
        } else {
            let (Some(start), Some(end)) = (&s.start, &s.end) else {
                bail!("dated season {:?} needs start and end", s.name);
            };
            SeasonDefinition::dated(&s.name, parse_date(start)?, parse_date(end)?)
        };
        if let Some(a) = &s.abbreviation {
            season = season.with_abbreviation(a);
        }
        if let Some(climate) = build_climate(s.temperature, &s.presets) {
            season = season.with_climate(climate);
        }
        list.push(season);
    }

    Ok(if periodic {
        SeasonSet::periodic(seasons.offset, list)
    } else {
        SeasonSet::dated(list)
    })
}

/// Builds a [`MoonDefinition`]; the reference date uses a display year
/// and a 1-based month and day.
pub fn build_moon(m: &MoonToml) -> Result<MoonDefinition> {
    let mut moon =
        MoonDefinition::new(&m.name, m.cycle_length).with_cycle_day_adjust(m.cycle_day_adjust);
    if !m.phases.is_empty() {
        let phases = m
            .phases
            .iter()
            .map(|p| {
                let mut phase = PhaseDefinition::new(&p.name);
                if let Some(r) = &p.rising {
                    phase = phase.with_rising(r);
                }
                if let Some(f) = &p.fading {
                    phase = phase.with_fading(f);
                }
                if let Some([start, end]) = p.range {
                    phase = phase.with_range(start, end);
                }
                phase
            })
            .collect();
        moon = moon.with_phases(phases);
    }
    if let Some(r) = &m.reference {
        let date = parse_date(&DateToml {
            month: r.month,
            day: r.day,
        })
        .with_context(|| format!("moon {:?} reference date", m.name))?;
        let reference = ReferenceDate::new(r.year, date.month, date.day);
        moon = moon.with_reference(reference, m.reference_phase);
    } else if m.reference_phase != 0 {
        let date = moon.reference_date;
        moon = moon.with_reference(date, m.reference_phase);
    }
    Ok(moon)
}

fn build_era(e: &EraToml) -> EraDefinition {
    let mut era = EraDefinition::new(&e.name, e.start_year);
    if let Some(a) = &e.abbreviation {
        era = era.with_abbreviation(a);
    }
    if let Some(end) = e.end_year {
        era = era.ending(end);
    }
    era
}

/// Builds a [`CycleDefinition`].
pub fn build_cycle(c: &CycleToml) -> Result<CycleDefinition> {
    let basis = parse_cycle_basis(&c.based_on)?;
    let mut cycle = CycleDefinition::new(&c.name, basis, &c.stages).with_offset(c.offset);
    if let Some(length) = c.length {
        cycle = cycle.with_length(length);
    }
    Ok(cycle)
}

fn build_canonical_hour(h: &CanonicalHourToml) -> CanonicalHour {
    let mut hour = CanonicalHour::new(&h.name, h.start, h.end);
    if let Some(a) = &h.abbreviation {
        hour = hour.with_abbreviation(a);
    }
    hour
}

/// Builds a [`DaylightConfig`]; solstices are 1-based days of year.
pub fn build_daylight(d: &DaylightToml) -> Result<DaylightConfig> {
    let mut cfg = DaylightConfig::curve(d.shortest_day, d.longest_day);
    cfg.enabled = d.enabled;
    if let Some(w) = d.winter_solstice {
        cfg.winter_solstice = Some(zero_based(w, "winter_solstice")?);
    }
    if let Some(s) = d.summer_solstice {
        cfg.summer_solstice = Some(zero_based(s, "summer_solstice")?);
    }
    Ok(cfg)
}

/// Builds a [`ClimateZone`].
pub fn build_zone(z: &ZoneToml) -> ClimateZone {
    let mut zone = ClimateZone::new(&z.id);
    if let Some(name) = &z.name {
        zone = zone.with_name(name);
    }
    if let Some(lat) = z.latitude {
        zone = zone.with_latitude(lat);
    }
    if let Some([shortest, longest]) = z.day_lengths {
        zone = zone.with_day_lengths(shortest, longest);
    }
    for (season, &[min, max]) in &z.temperatures {
        zone = zone.with_temperature(season, min, max);
    }
    for (id, p) in &z.presets {
        let mut preset = ZonePreset::new(p.chance);
        if !p.enabled {
            preset = preset.disabled();
        }
        if let Some(t) = p.temp_min {
            preset = preset.with_temp_min(t);
        }
        if let Some(t) = p.temp_max {
            preset = preset.with_temp_max(t);
        }
        zone = zone.with_preset(id, preset);
    }
    for (season, o) in &z.overrides {
        let mut over = SeasonOverride::default();
        if let Some([min, max]) = o.temperature {
            over = over.with_temperatures(min, max);
        }
        for (id, &chance) in &o.presets {
            over = over.with_preset(id, chance);
        }
        zone = zone.with_season_override(season, over);
    }
    zone
}

/// Builds and validates the calendar described by `cfg`.
pub fn build_calendar(cfg: &OrreryConfig) -> Result<CalendarDefinition> {
    let cal = &cfg.calendar;
    let months = cfg
        .months
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let mut month = build_month(m);
            month.ordinal = i as u32 + 1;
            month
        });

    let mut builder = CalendarBuilder::new(&cal.name)
        .with_months(months)
        .with_weekdays(cfg.weekdays.iter().map(build_weekday))
        .with_first_weekday(cal.first_weekday)
        .with_time_units(TimeUnits::new(
            cal.time.hours_per_day,
            cal.time.minutes_per_hour,
            cal.time.seconds_per_minute,
        ))
        .with_year_zero(cal.year_zero)
        .with_has_year_zero(cal.has_year_zero)
        .with_leap_rule(parse_leap_rule(&cal.leap)?)
        .with_festivals(
            cfg.festivals
                .iter()
                .map(build_festival)
                .collect::<Result<Vec<_>>>()?,
        )
        .with_moons(cfg.moons.iter().map(build_moon).collect::<Result<Vec<_>>>()?)
        .with_eras(cfg.eras.iter().map(build_era))
        .with_cycles(cfg.cycles.iter().map(build_cycle).collect::<Result<Vec<_>>>()?)
        .with_canonical_hours(cfg.canonical_hours.iter().map(build_canonical_hour))
        .with_climate_zones(cfg.zones.iter().map(build_zone));
    if let Some(seasons) = &cfg.seasons {
        builder = builder.with_seasons(build_seasons(seasons)?);
    }
    if let Some(daylight) = &cfg.daylight {
        builder = builder.with_daylight(build_daylight(daylight)?);
    }

    builder
        .build()
        .with_context(|| format!("invalid calendar {:?}", cal.name))
}

/// Builds the weather preset catalog.
pub fn build_catalog(presets: &[WeatherPresetToml]) -> WeatherCatalog {
    WeatherCatalog::new(presets.iter().map(|p| {
        let mut preset = WeatherPreset::new(&p.id).with_darkness_penalty(p.darkness_penalty);
        preset.temp_min = p.temp_min;
        preset.temp_max = p.temp_max;
        preset
    }))
}

/// Converts a display year and 1-based month and day into components,
/// checking them against the calendar.
pub fn build_components(
    calendar: &CalendarDefinition,
    year: i64,
    month: usize,
    day: u32,
    (hour, minute, second): (u32, u32, u32),
) -> Result<TimeComponents> {
    let date = parse_date(&DateToml { month, day })?;
    let internal = calendar.internal_year(year);
    let c = TimeComponents::new(internal, date.month, date.day).with_time(hour, minute, second);
    calendar
        .validate_components(&c)
        .with_context(|| format!("invalid date {year}-{month}-{day}"))?;
    Ok(c)
}
