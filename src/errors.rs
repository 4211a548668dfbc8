//! Unified application error type.
//! Store, views, config and CLI all return AppError so that every failure
//! reaches the presentation layer through the same channel.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid answer: {0} (expected yes or no)")]
    InvalidAnswer(String),

    #[error("Invalid employee id: {0}")]
    InvalidEmployeeId(i64),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Employee name must not be empty")]
    EmptyName,

    #[error("An employee named '{0}' already exists")]
    DuplicateEmployee(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("Survey is not valid: an employee, a date and a finite temperature are required")]
    InvalidSurvey,

    #[error("A survey for employee {employee_id} on {date} already exists")]
    DuplicateSurvey { date: NaiveDate, employee_id: i64 },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for failures caused by the storage layer rather than by
    /// rejected input.
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Db(_) | AppError::Io(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
