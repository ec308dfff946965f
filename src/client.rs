use tracing::{debug, warn};

use crate::drivers::{SqliteDriver, TokioPostgresDriver};
use crate::error::{Result, SqlLoaderError};
use crate::executor::{self, ExecutionReport};
use crate::traits::DatabaseDriver;
use crate::types::DriverKind;

/// Main entry point for sql-loader.
/// Owns one database connection for the duration of a script run.
pub struct LoaderClient {
    driver: Box<dyn DatabaseDriver>,
}

impl LoaderClient {
    /// Open a connection with the selected driver and confirm it is reachable.
    ///
    /// # Example
    /// ```ignore
    /// let client = LoaderClient::connect(DriverKind::Sqlite, "app.db").await?;
    /// ```
    pub async fn connect(kind: DriverKind, connection_string: &str) -> Result<Self> {
        if connection_string.is_empty() {
            return Err(SqlLoaderError::configuration("DSN cannot be empty"));
        }

        let driver: Box<dyn DatabaseDriver> = match kind {
            DriverKind::Postgres => {
                Box::new(TokioPostgresDriver::connect(connection_string).await?)
            }
            DriverKind::Sqlite => Box::new(SqliteDriver::open(connection_string)?),
        };
        debug!(driver = %kind, "connection opened");

        Self::verified(driver).await
    }

    /// Ping `driver` and wrap it on success.
    /// On failure the driver is closed before the error is returned.
    pub async fn verified(driver: Box<dyn DatabaseDriver>) -> Result<Self> {
        let ping = driver.ping().await;
        if let Err(source) = ping {
            let close = driver.close().await.err();
            if let Some(e) = &close {
                warn!(error = %e, "failed to release unreachable connection");
            }
            return Err(SqlLoaderError::Unreachable { source, close });
        }
        Ok(Self { driver })
    }

    /// Create a new client with a custom driver, skipping the reachability check.
    /// Useful for testing or using alternative database drivers.
    pub fn with_driver(driver: Box<dyn DatabaseDriver>) -> Self {
        Self { driver }
    }

    /// Split `script` on `;` and execute each statement in order.
    pub async fn execute_script(&self, script: &str) -> Result<ExecutionReport> {
        executor::execute_script(self.driver.as_ref(), script).await
    }

    /// Release the connection.
    pub async fn close(self) -> Result<()> {
        self.driver.close().await.map_err(SqlLoaderError::Close)
    }
}
