//! # huntopt
//!
//! Entropia Universe hunting optimizer library - creature data join,
//! filtering and codex cost calculation.
//!
//! This library provides functionality to:
//! - Load creature attribute and maturity level tables (CSV or JSON)
//! - Join them into one record per creature maturity
//! - Filter records by name, location, looter skill, damage type, combat
//!   style and HP, sorted by HP per level (lower is better for skilling)
//! - Compute the cost to the next codex meta rank
//!
//! ## Example
//!
//! ```no_run
//! use huntopt::{FilterCriteria, MobDatabase};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let db = MobDatabase::from_csv_paths("share/data/mobs.csv", "share/data/levels.csv")?;
//!
//! let criteria = FilterCriteria::builder()
//!     .location("Calypso")
//!     .damage("acid")?
//!     .exclusive(true)
//!     .build();
//!
//! for mob in db.filter(&criteria) {
//!     println!("{} {} {:.2}", mob.name, mob.maturity, mob.hp_per_level);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod codex;
pub mod damage;
pub mod db;
pub mod filter;
pub mod join;
pub mod remote;
pub mod rows;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use catalog::Catalog;
#[doc(inline)]
pub use codex::{CodexBook, CodexCreature, CodexLocation, RankInput};
#[doc(inline)]
pub use damage::{DamageProfile, DamageType};
#[doc(inline)]
pub use db::MobDatabase;
#[doc(inline)]
pub use filter::{FilterCriteria, FilterCriteriaBuilder, HpBounds};
#[doc(inline)]
pub use join::{join, CreatureRecord, Joined};
#[doc(inline)]
pub use rows::{load_level_rows, load_mob_rows, LevelRow, MobRow};

/// Label used for string fields that are missing or blank in the source data
pub const UNKNOWN: &str = "unknown";

/// Selector value meaning "do not filter on this field"
pub const ALL: &str = "All";

/// Errors from loading and querying hunting data
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected JSON shape: {0}")]
    UnexpectedJsonShape(String),

    #[error("Invalid damage type: {0}")]
    UnknownDamageType(String),

    #[error("Unknown creature: {0}")]
    UnknownCreature(String),
}

pub type Result<T> = std::result::Result<T, Error>;
