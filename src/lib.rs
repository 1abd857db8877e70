//! summitq library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Fields { .. } => cli::commands::fields::handle(&cli.command),
        Commands::Query { .. } => cli::commands::query::handle(&cli.command, cfg),
        Commands::Reconcile { .. } => cli::commands::reconcile::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once; an explicit --config path wins over the default.
    let cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    dispatch(&cli, &cfg)
}
