use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::config::LoaderConfig;
use crate::types::DriverKind;

/// Flags that may also be spelled with a single dash.
const LONG_FLAGS: &[&str] = &["driver", "dsn", "file", "version", "help"];

#[derive(Debug, Parser)]
#[command(name = "sql-loader")]
#[command(about = "Execute a SQL script against a PostgreSQL or SQLite database")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Show version information.
    #[arg(long)]
    pub version: bool,

    /// Database driver (postgres, sqlite).
    #[arg(long, env = "SQL_LOADER_DRIVER", default_value_t = DriverKind::Postgres)]
    pub driver: DriverKind,

    /// Database connection string.
    #[arg(long, env = "SQL_LOADER_DSN")]
    pub dsn: Option<String>,

    /// SQL script file to execute.
    #[arg(long, env = "SQL_LOADER_FILE", value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Parse process arguments, accepting `-flag` as well as `--flag`.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn into_config(self) -> LoaderConfig {
        LoaderConfig {
            driver: self.driver,
            dsn: self.dsn.unwrap_or_default(),
            file: self.file.unwrap_or_default(),
        }
    }
}

/// Rewrite single-dash long flags (`-dsn x`, `-file=x`) to their double-dash form.
/// Arguments after a bare `--` are left alone.
pub fn normalize_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    None
                }
                Some(s) if is_single_dash_long_flag(s) => Some(OsString::from(format!("-{s}"))),
                _ => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split('=').next().unwrap_or(rest);
    LONG_FLAGS.contains(&name)
}
