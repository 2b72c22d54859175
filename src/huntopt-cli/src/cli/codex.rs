//! CLI definitions for the codex command

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum CodexCommand {
    /// List codex creatures and their cycle costs
    List {
        /// Only this location (e.g. "Arkadia")
        #[arg(short, long)]
        location: Option<String>,

        /// Directory holding the codex files (defaults to configured directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Cost to reach the next meta rank
    Cost {
        /// Creature name
        creature: String,

        /// Current rank and progress, e.g. "17.8" for rank 17 at 80%
        rank: String,

        /// Directory holding the codex files (defaults to configured directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}
