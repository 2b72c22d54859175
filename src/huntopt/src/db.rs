//! Loaded creature database for querying hunting targets

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::catalog::Catalog;
use crate::filter::{self, FilterCriteria};
use crate::join::{join, CreatureRecord, Joined};
use crate::remote;
use crate::rows::{load_level_rows, load_mob_rows};
use crate::Result;

/// Creature database for filtering hunting targets
#[derive(Debug, Clone, Default)]
pub struct MobDatabase {
    records: Vec<CreatureRecord>,
    catalog: Catalog,
}

impl MobDatabase {
    /// Load from the creature and maturity CSV files
    pub fn from_csv_paths<P: AsRef<Path>, Q: AsRef<Path>>(mobs: P, levels: Q) -> Result<Self> {
        let mobs = File::open(mobs)?;
        let levels = File::open(levels)?;
        Self::from_csv_readers(mobs, levels)
    }

    /// Load from already-open creature and maturity CSV sources
    pub fn from_csv_readers<M: Read, L: Read>(mobs: M, levels: L) -> Result<Self> {
        let mobs = load_mob_rows(mobs)?;
        let levels = load_level_rows(levels)?;
        Ok(Self::from_joined(join(&mobs, &levels)))
    }

    /// Load from a hosted API response body
    pub fn from_json_str(body: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        Self::from_json_value(&value)
    }

    /// Load from an already-parsed API response
    pub fn from_json_value(body: &serde_json::Value) -> Result<Self> {
        Ok(Self::from_joined(remote::join_json(body)?))
    }

    /// Create from an already-joined dataset
    pub fn from_joined(joined: Joined) -> Self {
        Self {
            records: joined.records,
            catalog: joined.catalog,
        }
    }

    /// Every (creature, maturity) record, in load order
    pub fn records(&self) -> &[CreatureRecord] {
        &self.records
    }

    /// Selector options seen in the data
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filter and rank records by HP per level
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<CreatureRecord> {
        filter::apply(&self.records, criteria)
    }

    /// All maturities of a creature by name (case-insensitive)
    ///
    /// An exact name match wins; otherwise every creature whose name
    /// contains the query is returned.
    pub fn find_by_name(&self, query: &str) -> Vec<&CreatureRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let exact: Vec<&CreatureRecord> = self
            .records
            .iter()
            .filter(|r| r.name.to_lowercase() == query)
            .collect();
        if !exact.is_empty() {
            return exact;
        }

        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MOBS_CSV: &str = "\
Name,Found on,Mob Type,Movement,Combat,Aggression,Is Event,Is Instance,Stb,Cut,Imp,Pen,Shr,Brn,Cld,Acd,Elc
Atrox,Calypso,Animal,Walks,Close,Aggressive,false,false,0,50,50,0,0,0,0,0,0
Atrox Queen,Calypso,Animal,Walks,Close,Aggressive,false,true,0,50,50,0,0,0,0,0,0
Feffoid,Arkadia,Mutant Investigator,Walks,Ranged,Aggressive,false,false,0,0,0,0,0,0,0,40,0
";

    const LEVELS_CSV: &str = "\
Creature,Maturity,Health,Danger Level,HP/Lvl,Attacks/min
Atrox,Young,450,12,37.5,20
Atrox,Old,1200,30,0,
Atrox Queen,Queen,9000,90,45.1,
Feffoid,Young,80,5,12.0,30
";

    fn db() -> MobDatabase {
        MobDatabase::from_csv_readers(MOBS_CSV.as_bytes(), LEVELS_CSV.as_bytes()).unwrap()
    }

    #[test]
    fn test_from_csv_readers() {
        let db = db();
        assert_eq!(db.len(), 4);
        assert_eq!(db.catalog().location_options(), vec!["All", "Arkadia", "Calypso"]);
        assert_eq!(db.catalog().damage_options(), vec!["All", "ACD", "CUT", "IMP"]);
    }

    #[test]
    fn test_from_csv_paths() {
        let dir = tempfile::tempdir().unwrap();
        let mobs_path = dir.path().join("mobs.csv");
        let levels_path = dir.path().join("levels.csv");
        File::create(&mobs_path)
            .unwrap()
            .write_all(MOBS_CSV.as_bytes())
            .unwrap();
        File::create(&levels_path)
            .unwrap()
            .write_all(LEVELS_CSV.as_bytes())
            .unwrap();

        let db = MobDatabase::from_csv_paths(&mobs_path, &levels_path).unwrap();
        assert_eq!(db.len(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MobDatabase::from_csv_paths(dir.path().join("nope.csv"), dir.path().join("x.csv"))
            .unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }

    #[test]
    fn test_filter_ranks_by_hp_per_level() {
        let db = db();
        let criteria = FilterCriteria::builder().location("Calypso").build();
        let result: Vec<_> = db
            .filter(&criteria)
            .into_iter()
            .map(|r| (r.name, r.maturity))
            .collect();
        assert_eq!(
            result,
            vec![
                ("Atrox".to_string(), "Young".to_string()),
                ("Atrox Queen".to_string(), "Queen".to_string()),
                ("Atrox".to_string(), "Old".to_string()),
            ]
        );
    }

    #[test]
    fn test_find_by_name_prefers_exact() {
        let db = db();
        let exact = db.find_by_name("atrox");
        assert_eq!(exact.len(), 2);
        assert!(exact.iter().all(|r| r.name == "Atrox"));

        let partial = db.find_by_name("queen");
        assert_eq!(partial.len(), 1);
        assert!(partial[0].is_instance);

        assert!(db.find_by_name("  ").is_empty());
    }

    #[test]
    fn test_from_json_str() {
        let db = MobDatabase::from_json_str(
            r#"{"data": [{"name": "Daikiba", "location": "Calypso", "maturity": "Young", "health": 90, "hpPerLevel": 9}]}"#,
        )
        .unwrap();
        assert_eq!(db.len(), 1);
        assert_eq!(db.records()[0].hp_per_level, 9.0);

        assert!(matches!(
            MobDatabase::from_json_str("not json"),
            Err(crate::Error::Json(_))
        ));
    }
}
