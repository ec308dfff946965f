use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SqlLoaderError};

/// Read a SQL script file and return its contents.
///
/// The contents are returned unchanged. A file that is not valid UTF-8 is a
/// read error with [`std::io::ErrorKind::InvalidData`].
pub fn load_script(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(SqlLoaderError::configuration("script path cannot be empty"));
    }

    let bytes = fs::read(path).map_err(|source| SqlLoaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "script loaded");

    String::from_utf8(bytes).map_err(|e| SqlLoaderError::Read {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })
}
