//! rtally library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
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
        Commands::Name { .. } => cli::commands::name::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Tally { .. } => cli::commands::tally::handle(&cli.command, cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Color { .. } => cli::commands::color::handle(&cli.command, cfg),
        Commands::Rename { .. } => cli::commands::rename::handle(&cli.command, cfg),
        Commands::List => cli::commands::list::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once; the CLI can override the store path
    let mut cfg = Config::load();
    if let Some(custom_store) = &cli.store {
        cfg.store = custom_store.clone();
    }

    dispatch(&cli, &cfg)
}
