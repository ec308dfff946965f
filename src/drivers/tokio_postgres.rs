use async_trait::async_trait;
use tokio::task::JoinHandle;
use tokio_postgres::{Client, Config, NoTls};
use tracing::{debug, error};

use crate::error::{DriverError, Result, SqlLoaderError};
use crate::traits::DatabaseDriver;
use crate::types::DriverKind;

/// PostgreSQL driver implementation using tokio-postgres.
pub struct TokioPostgresDriver {
    client: Client,
    connection: JoinHandle<std::result::Result<(), tokio_postgres::Error>>,
}

impl TokioPostgresDriver {
    /// Parse a connection string without touching the network.
    pub fn parse_config(connection_string: &str) -> Result<Config> {
        connection_string
            .parse::<Config>()
            .map_err(|e| SqlLoaderError::Open {
                driver: DriverKind::Postgres,
                source: e.into(),
            })
    }

    /// Connect to a PostgreSQL database.
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let config = Self::parse_config(connection_string)?;

        let (client, connection) =
            config
                .connect(NoTls)
                .await
                .map_err(|e| SqlLoaderError::Unreachable {
                    source: e.into(),
                    close: None,
                })?;

        // Spawn the connection handler; joined again on close
        let connection = tokio::spawn(async move {
            let result = connection.await;
            if let Err(e) = &result {
                error!(error = %e, "PostgreSQL connection error");
            }
            result
        });

        debug!("postgres connection established");
        Ok(Self { client, connection })
    }
}

#[async_trait]
impl DatabaseDriver for TokioPostgresDriver {
    async fn ping(&self) -> std::result::Result<(), DriverError> {
        self.client.simple_query("SELECT 1").await?;
        Ok(())
    }

    async fn execute(&self, statement: &str) -> std::result::Result<(), DriverError> {
        // Simple-query protocol, so statements that cannot be prepared still run
        self.client.batch_execute(statement).await?;
        Ok(())
    }

    async fn close(self: Box<Self>) -> std::result::Result<(), DriverError> {
        let Self { client, connection } = *self;

        // The connection task finishes once its last client handle is gone
        drop(client);
        match connection.await {
            Ok(result) => result.map_err(DriverError::from),
            Err(e) => Err(DriverError::msg(format!("connection task failed: {e}"))),
        }
    }
}
