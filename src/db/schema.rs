//! Fixed schema of the survey database. Created once, never altered.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};
use tracing::error;

pub const EMPLOYEE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Employee (
    emp_id  INTEGER UNIQUE NOT NULL PRIMARY KEY AUTOINCREMENT,
    name    TEXT NOT NULL COLLATE NOCASE
);
"#;

pub const SURVEY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Survey (
    survey_date  INTEGER NOT NULL,
    emp_id       INTEGER NOT NULL,
    q_one        INTEGER,
    q_two        INTEGER,
    q_three      INTEGER,
    temperature  REAL,
    PRIMARY KEY (survey_date, emp_id),
    FOREIGN KEY (emp_id) REFERENCES Employee(emp_id)
);
"#;

fn table_exists(conn: &Connection, name: &str) -> rusqlite::Result<bool> {
    let found: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// True when both tables are present.
pub fn schema_present(conn: &Connection) -> rusqlite::Result<bool> {
    Ok(table_exists(conn, "Employee")? && table_exists(conn, "Survey")?)
}

/// Create both tables in a single transaction: either both exist afterwards
/// or neither was added.
pub fn create_schema(conn: &mut Connection) -> AppResult<()> {
    let tx = conn.transaction()?;

    if let Err(e) = tx.execute_batch(EMPLOYEE_TABLE) {
        error!("(DB) Error creating employee table: {e}");
        return Err(e.into());
    }

    if let Err(e) = tx.execute_batch(SURVEY_TABLE) {
        error!("(DB) Error creating survey table: {e}");
        return Err(e.into());
    }

    tx.commit()?;
    Ok(())
}
