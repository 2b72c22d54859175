//! CLI argument definitions for huntopt
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod codex;
mod core;
mod mobs;

pub use codex::CodexCommand;
pub use core::{Cli, Commands};
pub use mobs::{FilterArgs, MobsCommand, OutputFormat, SourceArgs};
