//! Source table rows
//!
//! Two tables feed the pipeline: creature attributes (one row per creature)
//! and maturity levels (one row per creature growth stage). Both are read
//! from headed CSV. Malformed cells never fail a load; they fall back to
//! zero or an empty label.

use std::collections::HashMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::damage::{DamageProfile, DAMAGE_TYPES};
use crate::Result;

/// Column names of the creature attribute table
pub mod columns {
    pub const NAME: &str = "Name";
    pub const FOUND_ON: &str = "Found on";
    pub const MOB_TYPE: &str = "Mob Type";
    pub const MOVEMENT: &str = "Movement";
    pub const COMBAT: &str = "Combat";
    pub const AGGRESSION: &str = "Aggression";
    pub const IS_EVENT: &str = "Is Event";
    pub const IS_INSTANCE: &str = "Is Instance";

    pub const CREATURE: &str = "Creature";
    pub const MATURITY: &str = "Maturity";
    pub const HEALTH: &str = "Health";
    pub const DANGER_LEVEL: &str = "Danger Level";
    pub const HP_PER_LEVEL: &str = "HP/Lvl";
    pub const ATTACKS_PER_MIN: &str = "Attacks/min";
}

/// A row keyed by column header
pub type Fields = HashMap<String, String>;

/// One row of the creature attribute table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MobRow {
    pub name: String,
    pub location: String,
    pub category: String,
    pub movement: String,
    pub combat: String,
    pub aggression: String,
    pub is_event: bool,
    pub is_instance: bool,
    pub damage: DamageProfile,
}

impl MobRow {
    pub fn from_fields(fields: &Fields) -> Self {
        let text = |key: &str| fields.get(key).map(|s| s.trim().to_string()).unwrap_or_default();

        let mut damage = DamageProfile::default();
        for t in DAMAGE_TYPES {
            damage.set(t, coerce_f64(fields.get(t.column()).map(String::as_str)));
        }

        Self {
            name: text(columns::NAME),
            location: text(columns::FOUND_ON),
            category: text(columns::MOB_TYPE),
            movement: text(columns::MOVEMENT),
            combat: text(columns::COMBAT),
            aggression: text(columns::AGGRESSION),
            is_event: coerce_flag(fields.get(columns::IS_EVENT).map(String::as_str)),
            is_instance: coerce_flag(fields.get(columns::IS_INSTANCE).map(String::as_str)),
            damage,
        }
    }
}

/// One row of the maturity level table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelRow {
    pub creature: String,
    pub maturity: String,
    pub health: u32,
    pub danger_level: u32,
    pub hp_per_level: f64,
    pub attacks_per_min: Option<f64>,
}

impl LevelRow {
    pub fn from_fields(fields: &Fields) -> Self {
        let raw = |key: &str| fields.get(key).map(String::as_str);

        let attacks = coerce_f64(raw(columns::ATTACKS_PER_MIN));

        Self {
            creature: raw(columns::CREATURE).unwrap_or_default().trim().to_string(),
            maturity: raw(columns::MATURITY).unwrap_or_default().trim().to_string(),
            health: coerce_u32(raw(columns::HEALTH)),
            danger_level: coerce_u32(raw(columns::DANGER_LEVEL)),
            hp_per_level: coerce_f64(raw(columns::HP_PER_LEVEL)),
            attacks_per_min: (attacks > 0.0).then_some(attacks),
        }
    }
}

/// Read every row of a headed CSV table as header → cell maps
pub fn read_fields<R: Read>(reader: R) -> Result<Vec<Fields>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut rows = Vec::new();

    for result in rdr.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let fields: Fields = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        rows.push(fields);
    }

    Ok(rows)
}

/// Parse the creature attribute table
pub fn load_mob_rows<R: Read>(reader: R) -> Result<Vec<MobRow>> {
    let rows: Vec<MobRow> = read_fields(reader)?
        .iter()
        .map(MobRow::from_fields)
        .collect();
    tracing::debug!("Parsed {} creature rows", rows.len());
    Ok(rows)
}

/// Parse the maturity level table
pub fn load_level_rows<R: Read>(reader: R) -> Result<Vec<LevelRow>> {
    let rows: Vec<LevelRow> = read_fields(reader)?
        .iter()
        .map(LevelRow::from_fields)
        .collect();
    tracing::debug!("Parsed {} level rows", rows.len());
    Ok(rows)
}

/// Parse a non-negative float, defaulting to 0 for anything else
pub fn coerce_f64(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0)
}

/// Parse a non-negative integer, truncating decimals, defaulting to 0
pub fn coerce_u32(value: Option<&str>) -> u32 {
    let Some(value) = value.map(str::trim) else {
        return 0;
    };
    if let Ok(n) = value.parse::<u32>() {
        return n;
    }
    let f = coerce_f64(Some(value));
    if f >= u32::MAX as f64 {
        u32::MAX
    } else {
        f as u32
    }
}

/// Only the literal "true" is true
pub fn coerce_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim() == "true")
}
