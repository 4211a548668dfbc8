//! Scoped SQLite connections for single-user CLI usage.
//!
//! The pool keeps only the database path. Each operation opens its own
//! connection, and the connection is closed when it goes out of scope,
//! whichever way the operation returns.

use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DbPool {
    path: PathBuf,
}

impl DbPool {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the database file is already on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Open a fresh connection to the database file.
    ///
    /// Foreign keys are declared in the schema but not enforced: surveys may
    /// reference employee ids without an Employee row.
    pub fn acquire(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", false)?;
        Ok(conn)
    }

    /// Run `func` on a freshly opened connection, closing it afterwards.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        let mut conn = self.acquire()?;
        func(&mut conn)
    }
}
