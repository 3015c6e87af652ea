//! timekeeper library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use config::migrate::run_legacy_migration;
use errors::AppResult;
use ui::messages::{info, warning};
use utils::path::expand_tilde_string;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Project { .. } => cli::commands::project::handle(&cli.command, cfg),
        Commands::Track => cli::commands::track::handle(&cli.command, cfg),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Files from the former application name; never fatal.
    if !cli.test && cli.config_file.is_none() {
        match run_legacy_migration() {
            Ok(actions) => actions.into_iter().for_each(info),
            Err(e) => warning(format!("Legacy file migration failed: {}", e)),
        }
    }

    let mut cfg = Config::load_from(&cli::config_path(&cli));

    cfg.database = expand_tilde_string(cli.db.as_deref().unwrap_or(&cfg.database));
    if cli.read_only {
        cfg.read_only = true;
    }

    dispatch(&cli, &cfg)
}
