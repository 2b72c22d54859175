//! Damage type reference data
//!
//! Creatures deal damage split across nine fixed types. Each type has a
//! three-letter code (as used in the source tables) and a long name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// One of the nine damage categories a creature can deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DamageType {
    Stabbing,
    Cutting,
    Impact,
    Penetration,
    Shrapnel,
    Burn,
    Cold,
    Acid,
    Electric,
}

/// All damage types in source column order
pub const DAMAGE_TYPES: [DamageType; 9] = [
    DamageType::Stabbing,
    DamageType::Cutting,
    DamageType::Impact,
    DamageType::Penetration,
    DamageType::Shrapnel,
    DamageType::Burn,
    DamageType::Cold,
    DamageType::Acid,
    DamageType::Electric,
];

impl DamageType {
    /// Three-letter code, e.g. "ACD"
    pub fn code(self) -> &'static str {
        match self {
            DamageType::Stabbing => "STB",
            DamageType::Cutting => "CUT",
            DamageType::Impact => "IMP",
            DamageType::Penetration => "PEN",
            DamageType::Shrapnel => "SHR",
            DamageType::Burn => "BRN",
            DamageType::Cold => "CLD",
            DamageType::Acid => "ACD",
            DamageType::Electric => "ELC",
        }
    }

    /// Human-readable name, e.g. "Acid"
    pub fn name(self) -> &'static str {
        match self {
            DamageType::Stabbing => "Stabbing",
            DamageType::Cutting => "Cutting",
            DamageType::Impact => "Impact",
            DamageType::Penetration => "Penetration",
            DamageType::Shrapnel => "Shrapnel",
            DamageType::Burn => "Burn",
            DamageType::Cold => "Cold",
            DamageType::Acid => "Acid",
            DamageType::Electric => "Electric",
        }
    }

    /// Column header in the creature attribute table, e.g. "Acd"
    pub fn column(self) -> &'static str {
        match self {
            DamageType::Stabbing => "Stb",
            DamageType::Cutting => "Cut",
            DamageType::Impact => "Imp",
            DamageType::Penetration => "Pen",
            DamageType::Shrapnel => "Shr",
            DamageType::Burn => "Brn",
            DamageType::Cold => "Cld",
            DamageType::Acid => "Acd",
            DamageType::Electric => "Elc",
        }
    }

    /// Look up a damage type by code or name (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        DAMAGE_TYPES
            .iter()
            .copied()
            .find(|t| t.code().eq_ignore_ascii_case(code) || t.name().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DamageType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| Error::UnknownDamageType(s.to_string()))
    }
}

/// Percentage of damage dealt per type (each >= 0)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageProfile {
    pub stabbing: f64,
    pub cutting: f64,
    pub impact: f64,
    pub penetration: f64,
    pub shrapnel: f64,
    pub burn: f64,
    pub cold: f64,
    pub acid: f64,
    pub electric: f64,
}

impl DamageProfile {
    /// Percentage for a single damage type
    pub fn get(&self, damage: DamageType) -> f64 {
        match damage {
            DamageType::Stabbing => self.stabbing,
            DamageType::Cutting => self.cutting,
            DamageType::Impact => self.impact,
            DamageType::Penetration => self.penetration,
            DamageType::Shrapnel => self.shrapnel,
            DamageType::Burn => self.burn,
            DamageType::Cold => self.cold,
            DamageType::Acid => self.acid,
            DamageType::Electric => self.electric,
        }
    }

    /// Set the percentage for a single damage type
    pub fn set(&mut self, damage: DamageType, value: f64) {
        let slot = match damage {
            DamageType::Stabbing => &mut self.stabbing,
            DamageType::Cutting => &mut self.cutting,
            DamageType::Impact => &mut self.impact,
            DamageType::Penetration => &mut self.penetration,
            DamageType::Shrapnel => &mut self.shrapnel,
            DamageType::Burn => &mut self.burn,
            DamageType::Cold => &mut self.cold,
            DamageType::Acid => &mut self.acid,
            DamageType::Electric => &mut self.electric,
        };
        *slot = value;
    }

    /// Damage types with a non-zero share, in column order
    pub fn used(&self) -> impl Iterator<Item = (DamageType, f64)> + '_ {
        DAMAGE_TYPES
            .iter()
            .map(move |&t| (t, self.get(t)))
            .filter(|&(_, v)| v > 0.0)
    }

    /// True if `damage` is dealt and every other type is exactly zero
    pub fn is_exclusive(&self, damage: DamageType) -> bool {
        self.get(damage) > 0.0
            && DAMAGE_TYPES
                .iter()
                .filter(|&&t| t != damage)
                .all(|&t| self.get(t) == 0.0)
    }

    /// "TYPE value%" labels for every used type, e.g. `["ACD 40%"]`
    pub fn labels(&self) -> Vec<String> {
        self.used()
            .map(|(t, v)| format!("{} {}%", t.code(), v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_codes_and_names() {
        assert_eq!(DamageType::from_code("ACD"), Some(DamageType::Acid));
        assert_eq!(DamageType::from_code("acd"), Some(DamageType::Acid));
        assert_eq!(DamageType::from_code("acid"), Some(DamageType::Acid));
        assert_eq!(DamageType::from_code(" Electric "), Some(DamageType::Electric));
        assert_eq!(DamageType::from_code("plasma"), None);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "laser".parse::<DamageType>().unwrap_err();
        assert!(matches!(err, Error::UnknownDamageType(ref s) if s == "laser"));
    }

    #[test]
    fn test_every_type_has_distinct_code() {
        let mut codes: Vec<_> = DAMAGE_TYPES.iter().map(|t| t.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), DAMAGE_TYPES.len());
    }

    #[test]
    fn test_profile_get_set() {
        let mut profile = DamageProfile::default();
        for (i, &t) in DAMAGE_TYPES.iter().enumerate() {
            profile.set(t, i as f64 + 1.0);
        }
        for (i, &t) in DAMAGE_TYPES.iter().enumerate() {
            assert_eq!(profile.get(t), i as f64 + 1.0);
        }
    }

    #[test]
    fn test_exclusive() {
        let mut profile = DamageProfile {
            acid: 40.0,
            ..Default::default()
        };
        assert!(profile.is_exclusive(DamageType::Acid));
        assert!(!profile.is_exclusive(DamageType::Cutting));

        profile.cutting = 10.0;
        assert!(!profile.is_exclusive(DamageType::Acid));
    }

    #[test]
    fn test_labels() {
        let profile = DamageProfile {
            stabbing: 60.0,
            burn: 12.5,
            ..Default::default()
        };
        assert_eq!(profile.labels(), vec!["STB 60%", "BRN 12.5%"]);
    }
}
