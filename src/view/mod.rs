//! Read-only, display-ready projections of query results.
//!
//! A view is a header row, a raw result set and a per-column formatting rule.
//! Formatting happens when a cell is read, never when data is written, and a
//! value that does not fit its column's rule is shown as it is stored.

pub mod employee;
pub mod survey;

pub use employee::EmployeeView;
pub use survey::SurveyView;

use crate::utils::formatting::{int2yes_no, one_decimal, timestamp2date};
use rusqlite::types::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFormat {
    /// Timestamp → `dd/MM/yyyy`
    Date,
    /// 0/1 → "No"/"Yes"
    YesNo,
    /// Real → one decimal digit
    OneDecimal,
    Plain,
}

/// Render one cell according to its column rule.
pub fn format_cell(format: ColumnFormat, value: &Value) -> String {
    let formatted = match format {
        ColumnFormat::Date => as_int(value).and_then(timestamp2date),
        ColumnFormat::YesNo => as_int(value).and_then(int2yes_no).map(str::to_string),
        ColumnFormat::OneDecimal => as_float(value).map(one_decimal),
        ColumnFormat::Plain => None,
    };

    formatted.unwrap_or_else(|| raw_text(value))
}

/// A value as stored, with NULL shown as an empty cell.
pub fn raw_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => String::from_utf8_lossy(b).into_owned(),
    }
}

fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(*i),
        Value::Real(f) if f.fract() == 0.0 => Some(*f as i64),
        Value::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(i) => Some(*i as f64),
        Value::Real(f) => Some(*f),
        Value::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Header labels, column rules and the rows of one query.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    headers: Vec<String>,
    formats: Vec<ColumnFormat>,
    rows: Vec<Vec<Value>>,
}

impl TableView {
    pub fn new(headers: &[&str], formats: &[ColumnFormat], rows: Vec<Vec<Value>>) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            formats: formats.to_vec(),
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self, col: usize) -> Option<&str> {
        self.headers.get(col).map(String::as_str)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The stored value, without formatting.
    pub fn raw(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// The formatted cell; `None` outside the result set.
    pub fn display(&self, row: usize, col: usize) -> Option<String> {
        let value = self.raw(row, col)?;
        let format = self.formats.get(col).copied().unwrap_or(ColumnFormat::Plain);
        Some(format_cell(format, value))
    }

    pub fn display_row(&self, row: usize) -> Option<Vec<String>> {
        let cols = self.rows.get(row)?.len();
        (0..cols).map(|c| self.display(row, c)).collect()
    }

    pub fn display_rows(&self) -> Vec<Vec<String>> {
        (0..self.row_count())
            .filter_map(|r| self.display_row(r))
            .collect()
    }
}
