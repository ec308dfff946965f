mod sqlite;
mod tokio_postgres;

pub use self::in_memory_test::InMemoryTestDriver;
pub use self::sqlite::SqliteDriver;
pub use self::tokio_postgres::TokioPostgresDriver;
