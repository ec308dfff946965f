use async_trait::async_trait;

use crate::error::DriverError;

/// Trait for database driver implementations.
/// Drivers are responsible for:
/// - Verifying the database is reachable
/// - Executing a single SQL statement in the engine's autocommit mode
/// - Releasing the underlying connection exactly once
#[async_trait]
pub trait DatabaseDriver: Send + Sync {
    /// Round-trip to the database to confirm it is reachable.
    async fn ping(&self) -> Result<(), DriverError>;

    /// Execute one SQL statement. No parameters are bound.
    async fn execute(&self, statement: &str) -> Result<(), DriverError>;

    /// Release the connection.
    async fn close(self: Box<Self>) -> Result<(), DriverError>;
}
