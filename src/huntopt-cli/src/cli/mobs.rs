//! CLI definitions for the mobs command

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Output format for mobs filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// Where creature data comes from (defaults to the configured source)
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Creature attribute CSV
    #[arg(long, requires = "levels", conflicts_with = "remote")]
    pub mobs: Option<PathBuf>,

    /// Creature maturity CSV
    #[arg(long, requires = "mobs", conflicts_with = "remote")]
    pub levels: Option<PathBuf>,

    /// Fetch creature data as JSON from this URL
    #[arg(long)]
    pub remote: Option<String>,
}

/// Filter selectors; with none given nothing is listed
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Part of the creature name (case-insensitive)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Exact location (e.g. "Calypso")
    #[arg(short, long)]
    pub location: Option<String>,

    /// Looter skill: Animal, Mutant or Robot
    #[arg(short, long)]
    pub category: Option<String>,

    /// Damage type code or name (e.g. "ACD", "acid")
    #[arg(short, long)]
    pub damage: Option<String>,

    /// Only creatures dealing the selected damage type and no other
    #[arg(long, requires = "damage")]
    pub exclusive: bool,

    /// Combat style: Close or Ranged
    #[arg(long)]
    pub combat: Option<String>,

    /// Exact health
    #[arg(long, conflicts_with_all = ["hp_range", "hp_min", "hp_max"])]
    pub hp: Option<u32>,

    /// Filter health by range (use --hp-min/--hp-max)
    #[arg(long)]
    pub hp_range: bool,

    /// Minimum health (inclusive, implies --hp-range)
    #[arg(long)]
    pub hp_min: Option<u32>,

    /// Maximum health (inclusive, implies --hp-range)
    #[arg(long)]
    pub hp_max: Option<u32>,

    /// List every creature, applying only --name
    #[arg(short, long)]
    pub all: bool,
}

#[derive(Subcommand)]
pub enum MobsCommand {
    /// Filter creatures, best HP per level first
    #[command(visible_alias = "f")]
    Filter {
        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        source: SourceArgs,

        /// Output format: table (default), csv, json
        #[arg(long, default_value = "table")]
        format: OutputFormat,

        /// Show at most this many rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show every maturity of a creature
    Show {
        /// Creature name (e.g. "Atrox", "Feffoid")
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// List selector options (locations, looter skills, damage and combat types)
    Options {
        #[command(flatten)]
        source: SourceArgs,
    },
}
