//! Codex rank costs
//!
//! Every creature has a five-step codex cycle. Step `i` of a rank costs
//! `cycle_costs[i % 5]`; every fifth rank is a meta rank. Tables come one
//! file per location, named `Codex - <Location>.csv`, with decimal commas.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rows::read_fields;
use crate::{Error, Result};

/// Ranks per codex cycle; every multiple is a meta rank
pub const CYCLE_LEN: u32 = 5;

/// Column holding the creature name
const MOB_NAME: &str = "Mob Name";

/// Codex cost and reward table for one creature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodexCreature {
    pub name: String,
    pub cycle_costs: [f64; 5],
    pub rewards: [f64; 5],
}

impl CodexCreature {
    /// Next meta rank at or above `rank`
    pub fn next_meta_rank(rank: u32) -> u32 {
        rank.div_ceil(CYCLE_LEN) * CYCLE_LEN
    }

    /// Cost to reach the next meta rank from `rank` with `progress` percent
    /// of the current rank already done.
    ///
    /// Full precision; round only for display.
    pub fn cost_to_next_meta(&self, rank: u32, progress: f64) -> f64 {
        let next_meta = Self::next_meta_rank(rank);
        if rank >= next_meta {
            return 0.0;
        }

        let total: f64 = (rank..next_meta).map(|i| self.cost_at(i)).sum();
        total - self.cost_at(rank) * (progress / 100.0)
    }

    /// Cost of completing `rank`
    pub fn cost_at(&self, rank: u32) -> f64 {
        self.cycle_costs[(rank % CYCLE_LEN) as usize]
    }

    /// Reward for completing `rank`
    pub fn reward_for_rank(&self, rank: u32) -> f64 {
        self.rewards[(rank % CYCLE_LEN) as usize]
    }
}

/// Rank and progress parsed from a single "rank.progress" entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RankInput {
    pub rank: u32,
    /// Percent of the current rank completed (0..100)
    pub progress: f64,
}

impl RankInput {
    /// Parse input such as "17.8" (rank 17, 80 %) or "17.85" (rank 17, 85 %).
    ///
    /// Anything other than digits and dots is dropped first. An empty rank
    /// is rank 0; a missing fraction is 0 %.
    pub fn parse(input: &str) -> Self {
        let sanitized: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        let mut parts = sanitized.split('.');
        let rank = parts
            .next()
            .and_then(|r| r.parse::<u32>().ok())
            .unwrap_or(0);
        let progress = parts
            .next()
            .filter(|f| !f.is_empty())
            .and_then(|f| format!("0.{}", f).parse::<f64>().ok())
            .map_or(0.0, |fraction| fraction * 100.0);

        Self { rank, progress }
    }

    pub fn cost(&self, creature: &CodexCreature) -> f64 {
        creature.cost_to_next_meta(self.rank, self.progress)
    }
}

/// Codex tables for every creature at one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodexLocation {
    pub location: String,
    pub creatures: Vec<CodexCreature>,
}

impl CodexLocation {
    /// Parse one location table
    pub fn from_reader<R: Read>(location: impl Into<String>, reader: R) -> Result<Self> {
        let creatures: Vec<CodexCreature> = read_fields(reader)?
            .iter()
            .filter_map(|row| {
                let name = row.get(MOB_NAME).map(|n| n.trim()).unwrap_or_default();
                if name.is_empty() {
                    return None;
                }
                let cell = |key: String| parse_decimal(row.get(&key).map(String::as_str));
                Some(CodexCreature {
                    name: name.to_string(),
                    cycle_costs: std::array::from_fn(|i| cell(format!("{}", i + 1))),
                    rewards: std::array::from_fn(|i| cell(format!("{} Reward", i + 1))),
                })
            })
            .collect();

        let location = location.into();
        tracing::debug!("Loaded {} codex creatures for {}", creatures.len(), location);
        Ok(Self {
            location,
            creatures,
        })
    }

    /// Parse a `Codex - <Location>.csv` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let location = location_from_path(path);
        Self::from_reader(location, File::open(path)?)
    }

    pub fn find(&self, name: &str) -> Option<&CodexCreature> {
        let name = name.trim();
        self.creatures
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// Every codex location, sorted by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodexBook {
    locations: Vec<CodexLocation>,
}

impl CodexBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `.csv` file in a directory
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.is_file()
                    && p.extension()
                        .and_then(|e| e.to_str())
                        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
            })
            .collect();
        paths.sort();

        let mut book = Self::new();
        for path in paths {
            book.insert(CodexLocation::load(&path)?);
        }
        tracing::info!("Loaded {} codex locations", book.locations.len());
        Ok(book)
    }

    /// Add a location, keeping locations sorted by name
    pub fn insert(&mut self, location: CodexLocation) {
        let at = self
            .locations
            .partition_point(|l| l.location < location.location);
        self.locations.insert(at, location);
    }

    pub fn locations(&self) -> &[CodexLocation] {
        &self.locations
    }

    pub fn location(&self, name: &str) -> Option<&CodexLocation> {
        self.locations
            .iter()
            .find(|l| l.location.eq_ignore_ascii_case(name.trim()))
    }

    /// Find a creature in any location
    pub fn find(&self, name: &str) -> Result<(&CodexLocation, &CodexCreature)> {
        self.locations
            .iter()
            .find_map(|l| l.find(name).map(|c| (l, c)))
            .ok_or_else(|| Error::UnknownCreature(name.to_string()))
    }
}

/// Location name from a `Codex - <Location>.csv` path
pub fn location_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    match stem.split_once(" - ") {
        Some((_, location)) => location.trim().to_string(),
        None => stem.trim().to_string(),
    }
}

/// Parse a decimal-comma number such as "0,35"; anything invalid is 0
pub fn parse_decimal(value: Option<&str>) -> f64 {
    value
        .map(|v| v.trim().replacen(',', ".", 1))
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Two-decimal display form of a cost
pub fn format_cost(cost: f64) -> String {
    format!("{:.2}", cost)
}
