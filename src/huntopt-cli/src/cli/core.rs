//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::codex::CodexCommand;
use super::mobs::MobsCommand;

#[derive(Parser)]
#[command(name = "huntopt")]
#[command(about = "Entropia Universe hunting optimizer", long_about = None)]
pub struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Creature queries (filter, show, options)
    #[command(visible_alias = "m")]
    Mobs {
        #[command(subcommand)]
        command: MobsCommand,
    },

    /// Codex rank costs (list, cost)
    #[command(visible_alias = "x")]
    Codex {
        #[command(subcommand)]
        command: CodexCommand,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Directory holding mobs.csv and levels.csv
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Directory holding the "Codex - <Location>.csv" files
        #[arg(long)]
        codex_dir: Option<PathBuf>,

        /// Fetch creature data from this URL instead of local files
        #[arg(long, conflicts_with = "clear_remote")]
        remote_url: Option<String>,

        /// Go back to local files
        #[arg(long)]
        clear_remote: bool,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    #[test]
    fn test_parse_filter() {
        let cli = Cli::try_parse_from([
            "huntopt", "mobs", "filter", "--location", "Calypso", "--damage", "ACD",
            "--exclusive", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Mobs {
                command:
                    MobsCommand::Filter {
                        filters, format, ..
                    },
            } => {
                assert_eq!(filters.location.as_deref(), Some("Calypso"));
                assert_eq!(filters.damage.as_deref(), Some("ACD"));
                assert!(filters.exclusive);
                assert!(matches!(format, OutputFormat::Json));
            }
            _ => panic!("expected mobs filter"),
        }
    }

    #[test]
    fn test_exclusive_requires_damage() {
        assert!(Cli::try_parse_from(["huntopt", "mobs", "filter", "--exclusive"]).is_err());
    }

    #[test]
    fn test_hp_conflicts_with_range() {
        assert!(
            Cli::try_parse_from(["huntopt", "mobs", "filter", "--hp", "10", "--hp-min", "5"])
                .is_err()
        );
    }

    #[test]
    fn test_parse_codex_cost_alias() {
        let cli = Cli::try_parse_from(["huntopt", "-v", "x", "cost", "Kanin", "17.8"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Codex {
                command: CodexCommand::Cost { creature, rank, .. },
            } => {
                assert_eq!(creature, "Kanin");
                assert_eq!(rank, "17.8");
            }
            _ => panic!("expected codex cost"),
        }
    }

    #[test]
    fn test_remote_url_conflicts_with_clear() {
        assert!(Cli::try_parse_from([
            "huntopt",
            "configure",
            "--remote-url",
            "https://example.org",
            "--clear-remote"
        ])
        .is_err());
    }
}
