mod cli;
mod commands;
mod config;
mod source;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::prelude::*;

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Mobs { command } => {
            let config = Config::load()?;
            commands::mobs::handle(command, &config)?;
        }

        Commands::Codex { command } => {
            let config = Config::load()?;
            commands::codex::handle(command, &config)?;
        }

        Commands::Configure {
            data_dir,
            codex_dir,
            remote_url,
            clear_remote,
            show,
        } => {
            let update = commands::configure::ConfigUpdate {
                data_dir,
                codex_dir,
                remote_url,
                clear_remote,
            };
            commands::configure::handle(update, show)?;
        }
    }

    Ok(())
}
