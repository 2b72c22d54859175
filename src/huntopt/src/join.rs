//! Creature/level join
//!
//! Each creature attribute row is paired with every maturity row that names
//! it, producing one [`CreatureRecord`] per (creature, maturity). A creature
//! with no maturity rows produces nothing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::damage::DamageProfile;
use crate::rows::{LevelRow, MobRow};
use crate::UNKNOWN;

/// One creature at one maturity, with its static attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureRecord {
    pub name: String,
    pub location: String,
    /// Looter skill, possibly compound (e.g. "Mutant Investigator")
    #[serde(rename = "type")]
    pub category: String,
    /// "TYPE value%" for every damage type dealt
    pub damage_types: Vec<String>,
    pub maturity: String,
    pub health: u32,
    pub danger_level: u32,
    /// Health per level; 0 means no ranked data
    pub hp_per_level: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacks_per_min: Option<f64>,
    pub movement: String,
    pub combat: String,
    pub aggression: String,
    pub is_event: bool,
    pub is_instance: bool,
    pub damage: DamageProfile,
}

impl CreatureRecord {
    /// Combine a creature's attributes with one of its maturity rows
    pub fn from_rows(mob: &MobRow, level: &LevelRow) -> Self {
        Self {
            name: mob.name.clone(),
            location: label(&mob.location),
            category: label(&mob.category),
            damage_types: mob.damage.labels(),
            maturity: label(&level.maturity),
            health: level.health,
            danger_level: level.danger_level,
            hp_per_level: level.hp_per_level,
            attacks_per_min: level.attacks_per_min,
            movement: label(&mob.movement),
            combat: label(&mob.combat),
            aggression: label(&mob.aggression),
            is_event: mob.is_event,
            is_instance: mob.is_instance,
            damage: mob.damage,
        }
    }

    /// First word of the category, which is what category filters match on
    pub fn looter_skill(&self) -> &str {
        self.category.split_whitespace().next().unwrap_or_default()
    }

    /// Category without the "Investigator" suffix, for display
    pub fn display_category(&self) -> String {
        let cleaned = self.category.replace("Investigator", "");
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            "N/A".to_string()
        } else {
            cleaned.to_string()
        }
    }
}

/// Output of [`join`]: records plus the option lists seen while building them
#[derive(Debug, Clone, Default)]
pub struct Joined {
    pub records: Vec<CreatureRecord>,
    pub catalog: Catalog,
}

impl Joined {
    /// Add one (creature, maturity) record and note its selector values
    pub fn push(&mut self, mob: &MobRow, level: &LevelRow) {
        self.catalog.add_location(&mob.location);
        self.catalog.add_category(&mob.category);
        for (damage, _) in mob.damage.used() {
            self.catalog.add_damage_type(damage);
        }
        self.records.push(CreatureRecord::from_rows(mob, level));
    }
}

/// Join creature rows with their maturity rows
pub fn join(mobs: &[MobRow], levels: &[LevelRow]) -> Joined {
    let mut by_creature: HashMap<&str, Vec<&LevelRow>> = HashMap::new();
    for level in levels {
        if level.creature.is_empty() {
            tracing::debug!("Skipping level row without creature name");
            continue;
        }
        by_creature.entry(level.creature.as_str()).or_default().push(level);
    }

    let mut joined = Joined::default();

    for mob in mobs {
        if mob.name.is_empty() {
            tracing::debug!("Skipping creature row without name");
            continue;
        }
        let Some(matches) = by_creature.get(mob.name.as_str()) else {
            tracing::debug!("No maturity rows for {}", mob.name);
            continue;
        };

        for level in matches {
            joined.push(mob, level);
        }
    }

    tracing::info!(
        "Joined {} creatures and {} level rows into {} records",
        mobs.len(),
        levels.len(),
        joined.records.len()
    );

    joined
}

fn label(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::DamageType;

    fn mob(name: &str, location: &str, category: &str) -> MobRow {
        MobRow {
            name: name.to_string(),
            location: location.to_string(),
            category: category.to_string(),
            ..Default::default()
        }
    }

    fn level(creature: &str, maturity: &str, health: u32) -> LevelRow {
        LevelRow {
            creature: creature.to_string(),
            maturity: maturity.to_string(),
            health,
            ..Default::default()
        }
    }

    #[test]
    fn test_record_count_matches_level_rows() {
        let mobs = vec![
            mob("Atrox", "Calypso", "Animal"),
            mob("Feffoid", "Calypso", "Mutant"),
            mob("Lonely", "Arkadia", "Robot"),
        ];
        let levels = vec![
            level("Atrox", "Young", 100),
            level("Feffoid", "Young", 50),
            level("Atrox", "Mature", 300),
            level("Atrox", "Old", 600),
            level("Nobody", "Young", 1),
        ];

        let joined = join(&mobs, &levels);
        assert_eq!(joined.records.len(), 4);

        let atrox: Vec<_> = joined
            .records
            .iter()
            .filter(|r| r.name == "Atrox")
            .map(|r| r.maturity.as_str())
            .collect();
        assert_eq!(atrox, vec!["Young", "Mature", "Old"]);
    }

    #[test]
    fn test_output_order_follows_creature_rows() {
        let mobs = vec![mob("B", "X", "Animal"), mob("A", "X", "Animal")];
        let levels = vec![level("A", "1", 1), level("B", "1", 2), level("A", "2", 3)];

        let joined = join(&mobs, &levels);
        let order: Vec<_> = joined.records.iter().map(|r| r.health).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn test_catalog_only_counts_joined_creatures() {
        let mut atrox = mob("Atrox", "Calypso", "Animal");
        atrox.damage.acid = 40.0;
        let mut ghost = mob("Ghost", "Toulan", "Robot");
        ghost.damage.cold = 10.0;

        let joined = join(&[atrox, ghost], &[level("Atrox", "Young", 10)]);
        assert_eq!(joined.catalog.location_options(), vec!["All", "Calypso"]);
        assert_eq!(joined.catalog.categories(), ["Animal"]);
        assert_eq!(joined.catalog.damage_types(), vec![DamageType::Acid]);
    }

    #[test]
    fn test_blank_names_are_skipped() {
        let joined = join(&[mob("", "Calypso", "Animal")], &[level("", "Young", 10)]);
        assert!(joined.records.is_empty());
        assert_eq!(joined.catalog.location_options(), vec!["All"]);
    }

    #[test]
    fn test_missing_labels_become_unknown() {
        let joined = join(&[mob("Atrox", "", " ")], &[level("Atrox", "", 10)]);
        let record = &joined.records[0];
        assert_eq!(record.location, UNKNOWN);
        assert_eq!(record.category, UNKNOWN);
        assert_eq!(record.maturity, UNKNOWN);
        assert_eq!(record.combat, UNKNOWN);
        assert_eq!(joined.catalog.location_options(), vec!["All"]);
    }

    #[test]
    fn test_damage_labels() {
        let mut atrox = mob("Atrox", "Calypso", "Animal");
        atrox.damage.cutting = 50.0;
        atrox.damage.impact = 50.0;

        let joined = join(&[atrox], &[level("Atrox", "Young", 10)]);
        assert_eq!(joined.records[0].damage_types, vec!["CUT 50%", "IMP 50%"]);
    }

    #[test]
    fn test_looter_skill_and_display_category() {
        let joined = join(
            &[mob("Feffoid", "Calypso", "Mutant Investigator")],
            &[level("Feffoid", "Young", 10)],
        );
        let record = &joined.records[0];
        assert_eq!(record.looter_skill(), "Mutant");
        assert_eq!(record.display_category(), "Mutant");

        let mut bare = record.clone();
        bare.category = "Investigator".to_string();
        assert_eq!(bare.display_category(), "N/A");
    }
}
