use std::fmt;

/// Build metadata baked in at compile time.
///
/// `SQL_LOADER_COMMIT` and `SQL_LOADER_BUILD_DATE` are read from the build
/// environment when set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub date: &'static str,
}

pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    commit: match option_env!("SQL_LOADER_COMMIT") {
        Some(commit) => commit,
        None => "none",
    },
    date: match option_env!("SQL_LOADER_BUILD_DATE") {
        Some(date) => date,
        None => "unknown",
    },
};

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sql-loader version {} (commit: {}, built: {})",
            self.version, self.commit, self.date
        )
    }
}
