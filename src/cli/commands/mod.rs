pub mod config;
pub mod db;
pub mod employee;
pub mod init;
pub mod survey;

use crate::config::Config;
use crate::db::SurveyStore;
use crate::errors::{AppError, AppResult};
use crate::models::answer::Answer;
use crate::utils::date;
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;
use crate::view::TableView;
use chrono::NaiveDate;

/// Open the configured database, creating it on first use.
pub(crate) fn open_store(cfg: &Config) -> AppResult<SurveyStore> {
    SurveyStore::open(expand_tilde(&cfg.database))
}

pub(crate) fn parse_answer(s: &str) -> AppResult<bool> {
    Answer::from_input(s)
        .map(|a| a.is_yes())
        .ok_or_else(|| AppError::InvalidAnswer(s.to_string()))
}

/// `YYYY-MM-DD`, or today when omitted.
pub(crate) fn parse_date_or_today(s: &Option<String>) -> AppResult<NaiveDate> {
    match s {
        Some(d) => date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone())),
        None => Ok(date::today()),
    }
}

pub(crate) fn render_view(view: &TableView) -> String {
    let mut table = Table::new(view.headers().to_vec());
    for row in view.display_rows() {
        table.add_row(row);
    }
    table.render()
}
