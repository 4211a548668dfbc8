use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

use super::open_store;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite database with the Employee and Survey tables
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if !cli.test {
        let path = cfg.save()?;
        info(format!("Config file : {}", path.display()));
    }

    let store = open_store(cfg)?;
    info(format!("Database    : {}", store.path().display()));

    success("HealthSurvey initialization completed!");
    Ok(())
}
