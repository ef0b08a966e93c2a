//! Shared database handle
//!
//! One [`rusqlite::Connection`] behind a mutex: each operation locks the
//! connection for its duration (the per-request "scoped session") and
//! the guard drop releases it on every exit path, errors included. The
//! workload is low-volume administrative CRUD, so a single connection is
//! the whole pool.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use rusqlite::Connection;

use crate::error::DbResult;
use crate::schema::{DROP_ALL, SCHEMA};

#[derive(Debug)]
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the database file and install the schema.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database (tests, throwaway runs).
    pub fn open_in_memory() -> DbResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> DbResult<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the scoped session for one operation.
    pub(crate) fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap()
    }

    /// Store connectivity probe for the health endpoint.
    pub fn health_check(&self) -> DbResult<()> {
        let conn = self.conn();
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }

    /// Names of all user tables, for the admin surface.
    pub fn table_names(&self) -> DbResult<Vec<String>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
             ORDER BY name",
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(row.get::<_, String>(0)?);
        }
        Ok(out)
    }

    /// Drop and recreate the whole schema. Destructive; callers gate
    /// this behind privileged access.
    pub fn reset(&self) -> DbResult<()> {
        let conn = self.conn();
        conn.execute_batch(DROP_ALL)?;
        conn.execute_batch(SCHEMA)?;
        tracing::warn!("database schema dropped and recreated");
        Ok(())
    }
}
