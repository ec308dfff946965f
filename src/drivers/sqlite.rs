use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::Connection;
use tracing::debug;

use crate::error::{DriverError, Result, SqlLoaderError};
use crate::traits::DatabaseDriver;
use crate::types::DriverKind;

/// SQLite driver implementation using rusqlite.
///
/// The connection string is a file path, `:memory:`, or a `file:` URI.
/// Calls block the current thread until SQLite returns.
pub struct SqliteDriver {
    conn: Mutex<Connection>,
}

impl SqliteDriver {
    /// Open (creating if needed) the SQLite database named by `connection_string`.
    pub fn open(connection_string: &str) -> Result<Self> {
        let conn = Connection::open(connection_string).map_err(|e| SqlLoaderError::Open {
            driver: DriverKind::Sqlite,
            source: e.into(),
        })?;

        debug!(path = connection_string, "sqlite database opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> std::result::Result<MutexGuard<'_, Connection>, DriverError> {
        self.conn
            .lock()
            .map_err(|_| DriverError::msg("sqlite connection lock poisoned"))
    }
}

#[async_trait]
impl DatabaseDriver for SqliteDriver {
    async fn ping(&self) -> std::result::Result<(), DriverError> {
        // Reads the database header, so a file that is not a database fails here
        let conn = self.lock()?;
        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }

    async fn execute(&self, statement: &str) -> std::result::Result<(), DriverError> {
        // execute_batch tolerates statements that return rows
        let conn = self.lock()?;
        conn.execute_batch(statement)?;
        Ok(())
    }

    async fn close(self: Box<Self>) -> std::result::Result<(), DriverError> {
        let conn = self
            .conn
            .into_inner()
            .map_err(|_| DriverError::msg("sqlite connection lock poisoned"))?;
        conn.close().map_err(|(_, e)| DriverError::from(e))
    }
}
