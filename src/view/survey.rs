use super::{ColumnFormat, TableView};
use rusqlite::types::Value;
use std::ops::Deref;

pub const HEADERS: [&str; 5] = [
    "Survey Date",
    "Question 1",
    "Question 2",
    "Question 3",
    "Temperature",
];

pub const FORMATS: [ColumnFormat; 5] = [
    ColumnFormat::Date,
    ColumnFormat::YesNo,
    ColumnFormat::YesNo,
    ColumnFormat::YesNo,
    ColumnFormat::OneDecimal,
];

/// Surveys of one employee ordered by date:
/// `survey_date, q_one, q_two, q_three, temperature`.
#[derive(Debug, Clone)]
pub struct SurveyView {
    employee_id: i64,
    table: TableView,
}

impl SurveyView {
    pub fn new(employee_id: i64, rows: Vec<Vec<Value>>) -> Self {
        Self {
            employee_id,
            table: TableView::new(&HEADERS, &FORMATS, rows),
        }
    }

    /// The employee this view was queried for.
    pub fn employee_id(&self) -> i64 {
        self.employee_id
    }
}

impl Default for SurveyView {
    fn default() -> Self {
        Self::new(-1, Vec::new())
    }
}

impl Deref for SurveyView {
    type Target = TableView;

    fn deref(&self) -> &TableView {
        &self.table
    }
}
