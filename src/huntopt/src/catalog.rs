//! Selector option lists derived from loaded data

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::damage::DamageType;
use crate::ALL;

/// Combat style options offered for filtering
pub const COMBAT_TYPES: &[&str] = &["Close", "Ranged"];

/// Looter skills offered for the category filter
pub const LOOTER_SKILLS: &[&str] = &["Animal", "Mutant", "Robot"];

/// Distinct values seen while joining, used to build selector options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    locations: BTreeSet<String>,
    categories: Vec<String>,
    damage_types: BTreeSet<DamageType>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a location; blank values are ignored
    pub fn add_location(&mut self, location: &str) {
        let location = location.trim();
        if !location.is_empty() && location != ALL {
            self.locations.insert(location.to_string());
        }
    }

    /// Record a category in first-seen order; blank values are ignored
    pub fn add_category(&mut self, category: &str) {
        let category = category.trim();
        if !category.is_empty() && !self.categories.iter().any(|c| c == category) {
            self.categories.push(category.to_string());
        }
    }

    pub fn add_damage_type(&mut self, damage: DamageType) {
        self.damage_types.insert(damage);
    }

    /// Distinct locations, sorted
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(String::as_str)
    }

    /// Distinct categories, in the order first seen
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Distinct damage types dealt by any creature, sorted by code
    pub fn damage_types(&self) -> Vec<DamageType> {
        let mut types: Vec<DamageType> = self.damage_types.iter().copied().collect();
        types.sort_by_key(|t| t.code());
        types
    }

    /// Location options with "All" first
    pub fn location_options(&self) -> Vec<String> {
        with_all(self.locations().map(str::to_string))
    }

    /// Damage type options (codes) with "All" first
    pub fn damage_options(&self) -> Vec<String> {
        with_all(self.damage_types().into_iter().map(|t| t.code().to_string()))
    }

    /// Looter skill options with "All" first
    pub fn category_options(&self) -> Vec<String> {
        with_all(LOOTER_SKILLS.iter().map(|s| s.to_string()))
    }

    /// Combat type options with "All" first
    pub fn combat_options(&self) -> Vec<String> {
        with_all(COMBAT_TYPES.iter().map(|s| s.to_string()))
    }
}

fn with_all(values: impl Iterator<Item = String>) -> Vec<String> {
    std::iter::once(ALL.to_string()).chain(values).collect()
}
