//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up huntopt CLI defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Settings requested on the command line
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub data_dir: Option<PathBuf>,
    pub codex_dir: Option<PathBuf>,
    pub remote_url: Option<String>,
    pub clear_remote: bool,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.data_dir.is_none()
            && self.codex_dir.is_none()
            && self.remote_url.is_none()
            && !self.clear_remote
    }

    /// Apply to a configuration
    fn apply(self, config: &mut Config) {
        if let Some(dir) = self.data_dir {
            config.data_dir = dir;
        }
        if let Some(dir) = self.codex_dir {
            config.codex_dir = dir;
        }
        if let Some(url) = self.remote_url {
            config.remote_url = Some(url);
        }
        if self.clear_remote {
            config.remote_url = None;
        }
    }
}

/// Handle the configure command
///
/// # Arguments
/// * `update` - Settings to change
/// * `show` - If true, show current configuration
pub fn handle(update: ConfigUpdate, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if update.is_empty() {
        show_usage();
        return Ok(());
    }

    update.apply(&mut config);
    config.save()?;

    println!("Configuration updated");
    show_config(&config);

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    println!("Data directory:  {}", config.data_dir.display());
    println!("Codex directory: {}", config.codex_dir.display());
    match &config.remote_url {
        Some(url) => println!("Remote URL:      {}", url),
        None => println!("Remote URL:      (not set, using local files)"),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file:     {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: huntopt configure --data-dir DIR");
    println!("   or: huntopt configure --codex-dir DIR");
    println!("   or: huntopt configure --remote-url URL | --clear-remote");
    println!("   or: huntopt configure --show");
    println!();
    println!("The data directory holds mobs.csv and levels.csv.");
    println!("The codex directory holds one 'Codex - <Location>.csv' per location.");
}
