//! carbonlog library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! estimator / history / store modules.

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
use crate::core::session::Session;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg, session),
        Commands::List => cli::commands::list::handle(&cli.command, cfg, session),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, session),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, session),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line override of the database
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4️⃣ resolve who is signed in
    let session = Session::resolve(cli.user.as_deref(), cfg.user.as_deref());

    dispatch(&cli, &cfg, session.as_ref())
}
