use crate::db::pool::DbPool;
use crate::db::queries::{count_employees, count_surveys, survey_date_range};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::timestamp2date;
use std::fs;

pub fn print_db_info(pool: &DbPool) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let db_path = pool.path().display().to_string();
    let file_size = fs::metadata(pool.path()).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    let (employees, surveys, range) = pool.with_conn(|conn| {
        Ok((
            count_employees(conn)?,
            count_surveys(conn)?,
            survey_date_range(conn)?,
        ))
    })?;

    //
    // 2) COUNTS
    //
    println!("{}• Employees:{} {}{}{}", CYAN, RESET, GREEN, employees, RESET);
    println!("{}• Surveys:{} {}{}{}", CYAN, RESET, GREEN, surveys, RESET);

    //
    // 3) DATE RANGE
    //
    let none = format!("{GREY}--{RESET}");
    let (fmt_first, fmt_last) = match range {
        Some((first, last)) => (
            timestamp2date(first).unwrap_or_else(|| none.clone()),
            timestamp2date(last).unwrap_or_else(|| none.clone()),
        ),
        None => (none.clone(), none),
    };

    println!("{}• Survey dates:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);
    println!();

    Ok(())
}

/// `PRAGMA integrity_check`; "ok" when the file is sound.
pub fn integrity_check(pool: &DbPool) -> AppResult<String> {
    pool.with_conn(|conn| {
        Ok(conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?)
    })
}
