//! Creature data loading for the mobs commands

use anyhow::{Context, Result};
use huntopt::{load_level_rows, load_mob_rows, MobDatabase};
use std::fs::File;
use std::path::Path;

use crate::cli::SourceArgs;
use crate::config::Config;

/// Load creature data from the source given on the command line, falling
/// back to the configured remote URL and then the configured data directory
pub fn load(source: &SourceArgs, config: &Config) -> Result<MobDatabase> {
    if let (Some(mobs), Some(levels)) = (&source.mobs, &source.levels) {
        return load_local(mobs, levels);
    }

    if let Some(url) = source.remote.as_ref().or(config.remote_url.as_ref()) {
        return load_remote(url);
    }

    load_local(&config.mobs_path(), &config.levels_path())
}

/// Read both CSV tables concurrently, then join
pub fn load_local(mobs_path: &Path, levels_path: &Path) -> Result<MobDatabase> {
    tracing::debug!(
        "Loading {} and {}",
        mobs_path.display(),
        levels_path.display()
    );

    let (mobs, levels) = std::thread::scope(|s| {
        let mobs = s.spawn(|| -> Result<_> {
            let file = File::open(mobs_path)
                .with_context(|| format!("Failed to open {}", mobs_path.display()))?;
            load_mob_rows(file).with_context(|| format!("Failed to parse {}", mobs_path.display()))
        });
        let levels = s.spawn(|| -> Result<_> {
            let file = File::open(levels_path)
                .with_context(|| format!("Failed to open {}", levels_path.display()))?;
            load_level_rows(file)
                .with_context(|| format!("Failed to parse {}", levels_path.display()))
        });
        (join_thread(mobs), join_thread(levels))
    });

    let joined = huntopt::join(&mobs?, &levels?);
    Ok(MobDatabase::from_joined(joined))
}

fn join_thread<T>(handle: std::thread::ScopedJoinHandle<'_, Result<T>>) -> Result<T> {
    handle
        .join()
        .map_err(|_| anyhow::anyhow!("Loader thread panicked"))?
}

/// Fetch the hosted JSON dataset
pub fn load_remote(url: &str) -> Result<MobDatabase> {
    tracing::info!("Fetching creature data from {}", url);

    let body: serde_json::Value = ureq::get(url)
        .call()
        .with_context(|| format!("Failed to fetch {}", url))?
        .into_json()
        .with_context(|| format!("Failed to read JSON from {}", url))?;

    MobDatabase::from_json_value(&body).context("Failed to load creature data")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_tables(dir: &Path) -> (PathBuf, PathBuf) {
        let mobs = dir.join("mobs.csv");
        let levels = dir.join("levels.csv");
        std::fs::write(
            &mobs,
            "Name,Found on,Mob Type,Combat,Acd\nFeffoid,Calypso,Mutant,Ranged,40\n",
        )
        .unwrap();
        std::fs::write(
            &levels,
            "Creature,Maturity,Health,HP/Lvl\nFeffoid,Young,80,12\nFeffoid,Old,160,0\n",
        )
        .unwrap();
        (mobs, levels)
    }

    #[test]
    fn test_load_local() {
        let dir = tempfile::tempdir().unwrap();
        let (mobs, levels) = write_tables(dir.path());

        let db = load_local(&mobs, &levels).unwrap();
        assert_eq!(db.len(), 2);
    }

    #[test]
    fn test_load_prefers_explicit_paths() {
        let dir = tempfile::tempdir().unwrap();
        let (mobs, levels) = write_tables(dir.path());
        let source = SourceArgs {
            mobs: Some(mobs),
            levels: Some(levels),
            remote: None,
        };
        let config = Config {
            data_dir: dir.path().join("missing"),
            ..Config::default()
        };

        assert_eq!(load(&source, &config).unwrap().len(), 2);
    }

    #[test]
    fn test_load_uses_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path());
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            ..Config::default()
        };

        assert_eq!(load(&SourceArgs::default(), &config).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_local(&dir.path().join("mobs.csv"), &dir.path().join("levels.csv"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}
