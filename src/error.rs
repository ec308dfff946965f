use std::path::PathBuf;

use thiserror::Error;

use crate::types::DriverKind;

/// Error raised by a database driver.
/// Keeps the engine-native error as the source where one exists.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Postgres(#[from] tokio_postgres::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("{0}")]
    Message(String),
}

impl DriverError {
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

/// The stage of a run that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Configure,
    Load,
    Connect,
    Execute,
    Close,
}

/// Error type for sql-loader operations
#[derive(Debug, Error)]
pub enum SqlLoaderError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("failed to load script {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to connect to database: failed to open {driver} database: {source}")]
    Open {
        driver: DriverKind,
        #[source]
        source: DriverError,
    },

    #[error("failed to connect to database: failed to ping database: {source}{}", close_note(.close))]
    Unreachable {
        #[source]
        source: DriverError,
        close: Option<DriverError>,
    },

    #[error("failed to execute script: statement {position} ({}) failed: {source}", preview(.statement))]
    StatementExecution {
        position: usize,
        statement: String,
        #[source]
        source: DriverError,
    },

    #[error("failed to close database: {0}")]
    Close(#[source] DriverError),
}

impl SqlLoaderError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn phase(&self) -> Phase {
        match self {
            Self::Configuration(_) => Phase::Configure,
            Self::Read { .. } => Phase::Load,
            Self::Open { .. } | Self::Unreachable { .. } => Phase::Connect,
            Self::StatementExecution { .. } => Phase::Execute,
            Self::Close(_) => Phase::Close,
        }
    }
}

/// Result type alias for sql-loader operations
pub type Result<T> = std::result::Result<T, SqlLoaderError>;

const PREVIEW_CHARS: usize = 60;

fn close_note(close: &Option<DriverError>) -> String {
    match close {
        Some(err) => format!(" (close error: {err})"),
        None => String::new(),
    }
}

/// Single-line, shortened form of a statement for error messages.
fn preview(statement: &str) -> String {
    let flat = statement.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PREVIEW_CHARS {
        return flat;
    }
    let mut short: String = flat.chars().take(PREVIEW_CHARS).collect();
    short.push_str("...");
    short
}
