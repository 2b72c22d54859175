//! JSON ingestion for the hosted creature API
//!
//! The API returns one flattened object per (creature, maturity). Key
//! spellings vary between deployments, so every object is first rewritten
//! onto the CSV column names through [`FIELD_ALIASES`]; the rest of the
//! pipeline never sees the alternate spellings.

use serde_json::Value;

use crate::join::Joined;
use crate::rows::{columns, Fields, LevelRow, MobRow};
use crate::{Error, Result};

/// Canonical column → accepted keys, in order of preference
pub const FIELD_ALIASES: &[(&str, &[&str])] = &[
    (columns::NAME, &["Name", "name"]),
    (columns::FOUND_ON, &["Found on", "location"]),
    (columns::MOB_TYPE, &["Mob Type", "type"]),
    (columns::MOVEMENT, &["Movement", "movement"]),
    (columns::COMBAT, &["Combat", "combat"]),
    (columns::AGGRESSION, &["Aggression", "aggression"]),
    (columns::IS_EVENT, &["Is Event", "isEvent"]),
    (columns::IS_INSTANCE, &["Is Instance", "isInstance"]),
    (columns::MATURITY, &["Maturity", "maturity"]),
    (columns::HEALTH, &["Health", "health"]),
    (columns::DANGER_LEVEL, &["Danger Level", "dangerLevel"]),
    (columns::HP_PER_LEVEL, &["HP/Lvl", "hpPerLevel"]),
    (columns::ATTACKS_PER_MIN, &["Attacks/min", "attacksPerMin"]),
    ("Stb", &["Stb", "stb"]),
    ("Cut", &["Cut", "cut"]),
    ("Imp", &["Imp", "imp"]),
    ("Pen", &["Pen", "pen"]),
    ("Shr", &["Shr", "shr"]),
    ("Brn", &["Brn", "brn"]),
    ("Cld", &["Cld", "cld"]),
    ("Acd", &["Acd", "acd"]),
    ("Elc", &["Elc", "elc"]),
];

/// Envelope members that may hold the row array
const ENVELOPE_KEYS: &[&str] = &["data", "mobs", "creatures"];

/// Rewrite one API object onto canonical column names
///
/// Null values count as absent, so a later alias can still supply the field.
pub fn normalize_object(object: &serde_json::Map<String, Value>) -> Fields {
    let mut fields = Fields::new();
    for (column, aliases) in FIELD_ALIASES {
        let value = aliases
            .iter()
            .filter_map(|key| object.get(*key))
            .find_map(scalar_text);
        if let Some(value) = value {
            fields.insert(column.to_string(), value);
        }
    }
    fields
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Locate the row array in an API response
fn rows_of(body: &Value) -> Result<&Vec<Value>> {
    match body {
        Value::Array(rows) => Ok(rows),
        Value::Object(map) => ENVELOPE_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array))
            .ok_or_else(|| {
                Error::UnexpectedJsonShape(format!(
                    "object without any of {:?} arrays",
                    ENVELOPE_KEYS
                ))
            }),
        other => Err(Error::UnexpectedJsonShape(format!(
            "expected array or object, got {}",
            kind(other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Split an API response into creature and level rows
pub fn rows_from_json(body: &Value) -> Result<(Vec<MobRow>, Vec<LevelRow>)> {
    let rows = rows_of(body)?;
    let mut mobs = Vec::with_capacity(rows.len());
    let mut levels = Vec::with_capacity(rows.len());

    for row in rows {
        let Some(object) = row.as_object() else {
            tracing::debug!("Skipping non-object row ({})", kind(row));
            continue;
        };
        let mut fields = normalize_object(object);
        if let Some(name) = fields.get(columns::NAME).cloned() {
            fields.insert(columns::CREATURE.to_string(), name);
        }
        mobs.push(MobRow::from_fields(&fields));
        levels.push(LevelRow::from_fields(&fields));
    }

    Ok((mobs, levels))
}

/// Join an API response into records
///
/// Each object already describes a single maturity, so each creature row
/// is joined only with its own level row.
pub fn join_json(body: &Value) -> Result<Joined> {
    let (mobs, levels) = rows_from_json(body)?;
    let mut joined = Joined::default();

    for (mob, level) in mobs.iter().zip(levels.iter()) {
        if mob.name.is_empty() {
            tracing::debug!("Skipping JSON row without creature name");
            continue;
        }
        joined.push(mob, level);
    }

    tracing::info!("Loaded {} records from JSON", joined.records.len());
    Ok(joined)
}
