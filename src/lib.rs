//! HealthSurvey library root.
//! Exposes the survey store, its views, the CLI parser and the high-level
//! run() function.

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;
pub mod view;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Employee { action } => cli::commands::employee::handle(action, cfg),
        Commands::Survey { action } => cli::commands::survey::handle(action, cfg),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; flags override it
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    if cli.yes {
        cfg.confirm_deletes = false;
    }

    dispatch(&cli, &cfg)
}
