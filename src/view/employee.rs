use super::{ColumnFormat, TableView};
use crate::models::employee::Employee;
use rusqlite::types::Value;
use std::ops::Deref;

pub const ID: usize = 0;
pub const NAME: usize = 1;

pub const HEADERS: [&str; 2] = ["ID", "Name"];
const FORMATS: [ColumnFormat; 2] = [ColumnFormat::Plain, ColumnFormat::Plain];

/// All employees ordered by name: `emp_id, name`.
#[derive(Debug, Clone)]
pub struct EmployeeView {
    table: TableView,
}

impl EmployeeView {
    pub fn new(rows: Vec<Vec<Value>>) -> Self {
        Self {
            table: TableView::new(&HEADERS, &FORMATS, rows),
        }
    }

    pub fn id_at(&self, row: usize) -> Option<i64> {
        match self.table.raw(row, ID)? {
            Value::Integer(id) => Some(*id),
            _ => None,
        }
    }

    pub fn name_at(&self, row: usize) -> Option<&str> {
        match self.table.raw(row, NAME)? {
            Value::Text(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Row of the employee with the given id.
    pub fn position_of(&self, id: i64) -> Option<usize> {
        (0..self.table.row_count()).find(|&r| self.id_at(r) == Some(id))
    }

    pub fn employees(&self) -> Vec<Employee> {
        (0..self.table.row_count())
            .filter_map(|r| Some(Employee::new(self.id_at(r)?, self.name_at(r)?)))
            .collect()
    }
}

impl Default for EmployeeView {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Deref for EmployeeView {
    type Target = TableView;

    fn deref(&self) -> &TableView {
        &self.table
    }
}
