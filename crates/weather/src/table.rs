//! Layered preset tables and weighted selection.

use indexmap::IndexMap;
use orrery_calendar::{ClimateProfile, ClimateZone};
use tracing::warn;

/// Preset forced when every layer leaves the table empty.
pub const FALLBACK_PRESET: &str = "clear";

fn set_chance(table: &mut IndexMap<String, f64>, id: &str, chance: f64) {
    if chance > 0.0 {
        table.insert(id.to_string(), chance);
    } else {
        table.shift_remove(id);
    }
}

/// Builds the preset weights for a season in a zone.
///
/// Starts from the season's own chances. The zone's override for the
/// season then replaces entries, or, when the zone has no override for
/// it, the zone's default preset table does. A chance of 0 removes the
/// entry and disabled zone presets never survive. An empty result
/// becomes `clear` with weight 1, so the weights always sum to a positive
/// value.
pub fn preset_table(
    season: Option<&str>,
    climate: Option<&ClimateProfile>,
    zone: Option<&ClimateZone>,
) -> IndexMap<String, f64> {
    let mut table: IndexMap<String, f64> = climate
        .map(|c| {
            c.presets
                .iter()
                .filter(|&(_, &w)| w > 0.0)
                .map(|(id, &w)| (id.clone(), w))
                .collect()
        })
        .unwrap_or_default();

    if let Some(zone) = zone {
        match season.and_then(|s| zone.season_overrides.get(s)) {
            Some(o) => {
                for (id, &chance) in &o.presets {
                    set_chance(&mut table, id, chance);
                }
            }
            None => {
                for (id, preset) in &zone.presets {
                    let chance = if preset.enabled { preset.chance } else { 0.0 };
                    set_chance(&mut table, id, chance);
                }
            }
        }
        table.retain(|id, _| zone.presets.get(id).is_none_or(|p| p.enabled));
    }

    if table.is_empty() {
        warn!(
            season,
            zone = zone.map(|z| z.id.as_str()),
            "no weather presets available, forcing clear"
        );
        table.insert(FALLBACK_PRESET.to_string(), 1.0);
    }
    table
}

/// Picks an entry with probability proportional to its weight.
///
/// `roll` is a uniform draw in `[0, 1)`. The last entry absorbs any
/// floating-point shortfall. Returns `None` only for an empty table.
pub fn select_preset(table: &IndexMap<String, f64>, roll: f64) -> Option<&str> {
    let total: f64 = table.values().sum();
    let mut remaining = roll * total;
    for (id, &weight) in table {
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(id);
        }
    }
    table.keys().last().map(String::as_str)
}
