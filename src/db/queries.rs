//! One function per SQL statement. Callers own the connection.

use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::survey::Survey;
use crate::utils::date;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// Employee
// ---------------------------

pub fn insert_employee(conn: &Connection, name: &str) -> Result<i64> {
    conn.execute("INSERT INTO Employee (name) VALUES (?1)", [name])?;
    Ok(conn.last_insert_rowid())
}

/// Case-insensitive name lookup.
pub fn employee_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare_cached("SELECT 1 FROM Employee WHERE name = ?1 COLLATE NOCASE LIMIT 1")?;
    stmt.exists([name])
}

/// Exact (case-sensitive) name lookup.
pub fn find_employee_id(conn: &Connection, name: &str) -> Result<Option<i64>> {
    conn.query_row(
        "SELECT emp_id FROM Employee WHERE name = ?1 COLLATE BINARY",
        [name],
        |row| row.get(0),
    )
    .optional()
}

pub fn rename_employee_by_id(conn: &Connection, id: i64, new_name: &str) -> Result<usize> {
    conn.execute(
        "UPDATE Employee SET name = ?1 WHERE emp_id = ?2",
        params![new_name, id],
    )
}

pub fn rename_employee_by_name(conn: &Connection, current: &str, new_name: &str) -> Result<usize> {
    conn.execute(
        "UPDATE Employee SET name = ?1 WHERE name = ?2 COLLATE BINARY",
        params![new_name, current],
    )
}

pub fn delete_surveys_of(conn: &Connection, employee_id: i64) -> Result<usize> {
    conn.execute("DELETE FROM Survey WHERE emp_id = ?1", [employee_id])
}

pub fn delete_employee(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM Employee WHERE emp_id = ?1", [id])
}

pub fn load_employee_rows(conn: &Connection) -> Result<Vec<Vec<Value>>> {
    let mut stmt = conn.prepare("SELECT emp_id, name FROM Employee ORDER BY name")?;
    let rows = stmt.query_map([], |row| raw_row(row, 2))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_employees(conn: &Connection) -> Result<Vec<Employee>> {
    let mut stmt = conn.prepare("SELECT emp_id, name FROM Employee ORDER BY name")?;
    let rows = stmt.query_map([], |row| Ok(Employee::new(row.get(0)?, row.get::<_, String>(1)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Survey
// ---------------------------

/// Timestamp under which a survey date is stored.
pub fn survey_key(survey_date: chrono::NaiveDate) -> AppResult<i64> {
    date::to_timestamp(survey_date).ok_or_else(|| AppError::InvalidDate(survey_date.to_string()))
}

pub fn survey_exists(conn: &Connection, timestamp: i64, employee_id: i64) -> Result<bool> {
    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM Survey WHERE survey_date = ?1 AND emp_id = ?2 LIMIT 1",
    )?;
    stmt.exists(params![timestamp, employee_id])
}

pub fn insert_survey(conn: &Connection, timestamp: i64, s: &Survey) -> Result<usize> {
    conn.execute(
        "INSERT INTO Survey (survey_date, emp_id, q_one, q_two, q_three, temperature)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            timestamp,
            s.employee_id,
            s.question_one,
            s.question_two,
            s.question_three,
            s.temperature,
        ],
    )
}

pub fn update_survey(conn: &Connection, timestamp: i64, s: &Survey) -> Result<usize> {
    conn.execute(
        "UPDATE Survey SET q_one = ?1, q_two = ?2, q_three = ?3, temperature = ?4
         WHERE survey_date = ?5 AND emp_id = ?6",
        params![
            s.question_one,
            s.question_two,
            s.question_three,
            s.temperature,
            timestamp,
            s.employee_id,
        ],
    )
}

pub fn delete_survey(conn: &Connection, timestamp: i64, employee_id: i64) -> Result<usize> {
    conn.execute(
        "DELETE FROM Survey WHERE survey_date = ?1 AND emp_id = ?2",
        params![timestamp, employee_id],
    )
}

pub fn load_survey_rows(conn: &Connection, employee_id: i64) -> Result<Vec<Vec<Value>>> {
    let mut stmt = conn.prepare(
        "SELECT survey_date, q_one, q_two, q_three, temperature
         FROM Survey
         WHERE emp_id = ?1
         ORDER BY survey_date",
    )?;
    let rows = stmt.query_map([employee_id], |row| raw_row(row, 5))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_surveys(conn: &Connection, employee_id: i64) -> Result<Vec<Survey>> {
    let mut stmt = conn.prepare(
        "SELECT survey_date, emp_id, q_one, q_two, q_three, temperature
         FROM Survey
         WHERE emp_id = ?1
         ORDER BY survey_date",
    )?;
    let rows = stmt.query_map([employee_id], map_survey)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_survey(row: &Row) -> Result<Survey> {
    let ts: i64 = row.get("survey_date")?;
    let survey_date = date::from_timestamp(ts).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Integer,
            Box::new(AppError::InvalidDate(ts.to_string())),
        )
    })?;

    Ok(Survey {
        survey_date: Some(survey_date),
        employee_id: row.get("emp_id")?,
        question_one: row.get::<_, Option<bool>>("q_one")?.unwrap_or(false),
        question_two: row.get::<_, Option<bool>>("q_two")?.unwrap_or(false),
        question_three: row.get::<_, Option<bool>>("q_three")?.unwrap_or(false),
        temperature: row.get::<_, Option<f64>>("temperature")?.unwrap_or(0.0),
    })
}

// ---------------------------
// Stats
// ---------------------------

pub fn count_employees(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM Employee", [], |row| row.get(0))
}

pub fn count_surveys(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM Survey", [], |row| row.get(0))
}

/// First and last stored survey timestamps.
pub fn survey_date_range(conn: &Connection) -> Result<Option<(i64, i64)>> {
    let (first, last): (Option<i64>, Option<i64>) = conn.query_row(
        "SELECT MIN(survey_date), MAX(survey_date) FROM Survey",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    Ok(first.zip(last))
}

fn raw_row(row: &Row, columns: usize) -> Result<Vec<Value>> {
    (0..columns).map(|i| row.get::<_, Value>(i)).collect()
}
