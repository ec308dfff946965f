//! sql-loader - Execute a SQL script file against PostgreSQL or SQLite
//!
//! The script is split on `;`, and each non-empty statement is executed in
//! order over a single connection. The first failing statement stops the run.
//!
//! # Example
//! ```ignore
//! use sql_loader::{DriverKind, LoaderClient};
//!
//! let script = sql_loader::load_script("schema.sql")?;
//! let client = LoaderClient::connect(DriverKind::Sqlite, "app.db").await?;
//! let report = client.execute_script(&script).await;
//! client.close().await?;
//! println!("{} statements", report?.statements_executed);
//! ```

pub mod cli;
pub mod config;
pub mod drivers;
pub mod error;
pub mod executor;
pub mod loader;
pub mod traits;
pub mod types;
pub mod version;

mod client;
mod run;

// Re-export main types for convenient access
pub use client::LoaderClient;
pub use config::LoaderConfig;
pub use error::{DriverError, Phase, Result, SqlLoaderError};
pub use executor::{execute_script, split_statements, ExecutionReport};
pub use loader::load_script;
pub use run::{run, PreparedRun, RunOutcome};
pub use traits::DatabaseDriver;
pub use types::DriverKind;
pub use version::{BuildInfo, BUILD_INFO};
