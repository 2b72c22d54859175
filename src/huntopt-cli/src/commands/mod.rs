//! Command handlers for huntopt CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod codex;
pub mod configure;
pub mod mobs;
