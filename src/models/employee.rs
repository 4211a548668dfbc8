use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,      // ⇔ Employee.emp_id (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub name: String, // ⇔ Employee.name (TEXT NOT NULL COLLATE NOCASE)
}

impl Employee {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
