//! Codex cost command handlers

use anyhow::{Context, Result};
use huntopt::codex::format_cost;
use huntopt::{CodexBook, CodexCreature, CodexLocation, RankInput};
use std::path::{Path, PathBuf};

use crate::cli::CodexCommand;
use crate::config::Config;

/// Handle the codex command
pub fn handle(command: CodexCommand, config: &Config) -> Result<()> {
    match command {
        CodexCommand::List { location, dir } => {
            let book = load_book(&codex_dir(dir, config))?;
            list(&book, location.as_deref())
        }
        CodexCommand::Cost {
            creature,
            rank,
            dir,
        } => {
            let book = load_book(&codex_dir(dir, config))?;
            cost(&book, &creature, &rank)
        }
    }
}

fn codex_dir(dir: Option<PathBuf>, config: &Config) -> PathBuf {
    dir.unwrap_or_else(|| config.codex_dir.clone())
}

fn load_book(dir: &Path) -> Result<CodexBook> {
    CodexBook::load_dir(dir)
        .with_context(|| format!("Failed to load codex files from {}", dir.display()))
}

fn list(book: &CodexBook, location: Option<&str>) -> Result<()> {
    let locations: Vec<&CodexLocation> = match location {
        Some(name) => vec![book
            .location(name)
            .with_context(|| format!("No codex location named '{}'", name))?],
        None => book.locations().iter().collect(),
    };

    if locations.is_empty() {
        println!("No codex files found");
        return Ok(());
    }

    for (i, location) in locations.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} ({} creatures)", location.location, location.creatures.len());
        println!(
            "  {:<28} {:>8} {:>8} {:>8} {:>8} {:>8}",
            "Creature", "1", "2", "3", "4", "5"
        );
        for creature in &location.creatures {
            let costs: Vec<String> = creature
                .cycle_costs
                .iter()
                .map(|c| format!("{:>8.2}", c))
                .collect();
            println!("  {:<28} {}", creature.name, costs.join(" "));
        }
    }

    Ok(())
}

fn cost(book: &CodexBook, creature: &str, rank: &str) -> Result<()> {
    let (location, creature) = book.find(creature)?;
    let input = RankInput::parse(rank);

    println!("{} ({})", creature.name, location.location);
    println!(
        "Rank {} at {:.0}% -> meta rank {}",
        input.rank,
        input.progress,
        CodexCreature::next_meta_rank(input.rank)
    );
    println!("Cost to next Meta rank: {} PED", format_cost(input.cost(creature)));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> (tempfile::TempDir, CodexBook) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("Codex - Arkadia.csv"),
            "Mob Name,1,2,3,4,5,1 Reward,2 Reward,3 Reward,4 Reward,5 Reward\nKanin,10,10,10,10,10,1,1,1,1,1\n",
        )
        .unwrap();
        let book = load_book(dir.path()).unwrap();
        (dir, book)
    }

    #[test]
    fn test_cost_known_creature() {
        let (_dir, book) = book();
        assert!(cost(&book, "kanin", "17.8").is_ok());
    }

    #[test]
    fn test_cost_unknown_creature() {
        let (_dir, book) = book();
        let err = cost(&book, "Nobody", "1").unwrap_err();
        assert!(err.to_string().contains("Nobody"));
    }

    #[test]
    fn test_list_unknown_location() {
        let (_dir, book) = book();
        assert!(list(&book, Some("arkadia")).is_ok());
        assert!(list(&book, Some("Toulan")).is_err());
    }

    #[test]
    fn test_missing_dir_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_book(&dir.path().join("missing")).unwrap_err();
        assert!(err.to_string().contains("Failed to load codex files"));
    }
}
