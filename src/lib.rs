//! studydesk library root.
//! Exposes the state container, its stores and derivations, the CLI parser
//! and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher.
///
/// Commands that touch the planner's data go through the sign-in gate inside
/// their handler; `init`, `signin`, `config`, `log`, `theme` and `accent`
/// work without an identity.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Signin { .. } | Commands::Signout | Commands::Profile { .. } => {
            cli::commands::profile::handle(&cli.command, cfg)
        }
        Commands::Class { .. } => cli::commands::class::handle(&cli.command, cfg),
        Commands::Assignment { .. } => cli::commands::assignment::handle(&cli.command, cfg),
        Commands::Exam { .. } => cli::commands::exam::handle(&cli.command, cfg),
        Commands::Dashboard => cli::commands::dashboard::handle(&cli.command, cfg),
        Commands::Gpa { .. } => cli::commands::gpa::handle(&cli.command, cfg),
        Commands::Theme { .. } => cli::commands::theme::handle(&cli.command, cfg),
        Commands::Accent { .. } => cli::commands::accent::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();

    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
