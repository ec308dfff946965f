use std::path::PathBuf;

use crate::error::{Result, SqlLoaderError};
use crate::types::DriverKind;

/// Everything a run needs: which engine, how to reach it, which script.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoaderConfig {
    pub driver: DriverKind,
    pub dsn: String,
    pub file: PathBuf,
}

impl LoaderConfig {
    pub fn new(driver: DriverKind, dsn: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            driver,
            dsn: dsn.into(),
            file: file.into(),
        }
    }

    /// Check required settings. The DSN is checked before the script path.
    pub fn validate(&self) -> Result<()> {
        if self.dsn.is_empty() {
            return Err(SqlLoaderError::configuration(
                "DSN is required (use -dsn flag)",
            ));
        }
        if self.file.as_os_str().is_empty() {
            return Err(SqlLoaderError::configuration(
                "script file is required (use -file flag)",
            ));
        }
        Ok(())
    }
}
