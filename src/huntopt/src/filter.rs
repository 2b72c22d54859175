//! Filtering and ranking of creature records
//!
//! Criteria are an immutable value; [`apply`] is a pure function of the
//! records and the criteria. Every predicate is a conjunction term, so the
//! order they are evaluated in does not affect the result.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::damage::DamageType;
use crate::join::CreatureRecord;
use crate::{Result, ALL};

/// HP constraint on a record's health
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HpBounds {
    /// No HP constraint
    #[default]
    Any,
    /// Health must equal the value
    Exact(u32),
    /// Inclusive range; a missing min is 0 and a missing max is unbounded
    Range { min: Option<u32>, max: Option<u32> },
}

impl HpBounds {
    pub fn contains(&self, health: u32) -> bool {
        match *self {
            HpBounds::Any => true,
            HpBounds::Exact(hp) => health == hp,
            HpBounds::Range { min, max } => {
                health >= min.unwrap_or(0) && max.map_or(true, |max| health <= max)
            }
        }
    }
}

/// What the user is looking for
///
/// The default value is "nothing selected yet", which [`apply`] answers
/// with an empty result rather than every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the creature name
    pub name: String,
    /// Exact location, or empty/"All"
    pub location: String,
    /// Looter skill matched against the first word of the category, or empty/"All"
    pub category: String,
    /// Damage type that must be dealt; `None` means any
    pub damage: Option<DamageType>,
    /// Require the selected damage type to be the only one dealt
    pub exclusive: bool,
    /// Exact combat style, or empty/"All"
    pub combat: String,
    pub hp: HpBounds,
    /// Ignore everything except the name
    pub show_all: bool,
}

type Predicate = fn(&FilterCriteria, &CreatureRecord) -> bool;

/// The conjunction terms applied when `show_all` is off
const PREDICATES: [Predicate; 5] = [
    FilterCriteria::matches_location,
    FilterCriteria::matches_category,
    FilterCriteria::matches_damage,
    FilterCriteria::matches_combat,
    FilterCriteria::matches_hp,
];

impl FilterCriteria {
    pub fn builder() -> FilterCriteriaBuilder {
        FilterCriteriaBuilder::default()
    }

    /// True when every selector is at its default
    pub fn is_neutral(&self) -> bool {
        self.name.trim().is_empty()
            && is_any(&self.location)
            && is_any(&self.category)
            && self.damage.is_none()
            && !self.exclusive
            && is_any(&self.combat)
            && self.hp == HpBounds::Any
    }

    /// Whether a single record passes these criteria
    pub fn matches(&self, record: &CreatureRecord) -> bool {
        if !self.matches_name(record) {
            return false;
        }
        self.show_all || PREDICATES.iter().all(|p| p(self, record))
    }

    fn matches_name(&self, record: &CreatureRecord) -> bool {
        let query = self.name.trim();
        query.is_empty() || record.name.to_lowercase().contains(&query.to_lowercase())
    }

    fn matches_location(&self, record: &CreatureRecord) -> bool {
        is_any(&self.location) || record.location == self.location
    }

    fn matches_category(&self, record: &CreatureRecord) -> bool {
        is_any(&self.category) || record.looter_skill() == self.category
    }

    fn matches_damage(&self, record: &CreatureRecord) -> bool {
        match self.damage {
            None => true,
            Some(damage) if self.exclusive => record.damage.is_exclusive(damage),
            Some(damage) => record.damage.get(damage) > 0.0,
        }
    }

    fn matches_combat(&self, record: &CreatureRecord) -> bool {
        is_any(&self.combat) || record.combat == self.combat
    }

    fn matches_hp(&self, record: &CreatureRecord) -> bool {
        self.hp.contains(record.health)
    }
}

fn is_any(selector: &str) -> bool {
    let selector = selector.trim();
    selector.is_empty() || selector == ALL
}

/// Builds [`FilterCriteria`] from user-entered text
#[derive(Debug, Clone, Default)]
pub struct FilterCriteriaBuilder {
    criteria: FilterCriteria,
}

impl FilterCriteriaBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.criteria.name = name.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.criteria.location = location.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.criteria.category = category.into();
        self
    }

    /// Select a damage type by code or name; empty or "All" clears it.
    ///
    /// Anything else that is not a known damage type is an error.
    pub fn damage(mut self, damage: &str) -> Result<Self> {
        self.criteria.damage = if is_any(damage) {
            None
        } else {
            Some(damage.parse()?)
        };
        Ok(self)
    }

    pub fn damage_type(mut self, damage: Option<DamageType>) -> Self {
        self.criteria.damage = damage;
        self
    }

    pub fn exclusive(mut self, exclusive: bool) -> Self {
        self.criteria.exclusive = exclusive;
        self
    }

    pub fn combat(mut self, combat: impl Into<String>) -> Self {
        self.criteria.combat = combat.into();
        self
    }

    /// Exact HP mode; `None` removes the HP constraint
    pub fn hp_exact(mut self, hp: Option<u32>) -> Self {
        self.criteria.hp = hp.map_or(HpBounds::Any, HpBounds::Exact);
        self
    }

    /// Range HP mode
    pub fn hp_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.criteria.hp = HpBounds::Range { min, max };
        self
    }

    pub fn show_all(mut self, show_all: bool) -> Self {
        self.criteria.show_all = show_all;
        self
    }

    pub fn build(self) -> FilterCriteria {
        self.criteria
    }
}

/// Filter records and rank them by HP per level
pub fn apply(records: &[CreatureRecord], criteria: &FilterCriteria) -> Vec<CreatureRecord> {
    if !criteria.show_all && criteria.is_neutral() {
        return Vec::new();
    }

    let mut matched: Vec<CreatureRecord> = records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect();
    sort_by_hp_per_level(&mut matched);

    tracing::debug!("{} of {} records matched", matched.len(), records.len());
    matched
}

/// Stable ascending sort by HP per level with unranked (0) records last
pub fn sort_by_hp_per_level(records: &mut [CreatureRecord]) {
    records.sort_by(|a, b| compare_hp_per_level(a.hp_per_level, b.hp_per_level));
}

/// Ordering where 0 means "unranked" and sorts after every positive value
pub fn compare_hp_per_level(a: f64, b: f64) -> Ordering {
    match (a == 0.0, b == 0.0) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}
