use std::fmt;
use std::str::FromStr;

use crate::error::SqlLoaderError;

/// Database engine family selected on the command line.
/// Resolved once, when the connection is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverKind {
    #[default]
    Postgres,
    Sqlite,
}

impl DriverKind {
    pub fn name(&self) -> &'static str {
        match self {
            DriverKind::Postgres => "postgres",
            DriverKind::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DriverKind {
    type Err = SqlLoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pgx" => Ok(DriverKind::Postgres),
            "sqlite" | "sqlite3" => Ok(DriverKind::Sqlite),
            other => Err(SqlLoaderError::configuration(format!(
                "unsupported driver {other:?} (expected postgres or sqlite)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("postgres".parse::<DriverKind>().unwrap(), DriverKind::Postgres);
        assert_eq!("PostgreSQL".parse::<DriverKind>().unwrap(), DriverKind::Postgres);
        assert_eq!("pgx".parse::<DriverKind>().unwrap(), DriverKind::Postgres);
        assert_eq!("sqlite".parse::<DriverKind>().unwrap(), DriverKind::Sqlite);
        assert_eq!("sqlite3".parse::<DriverKind>().unwrap(), DriverKind::Sqlite);
    }

    #[test]
    fn rejects_unknown_driver() {
        let err = "mysql".parse::<DriverKind>().unwrap_err();
        assert!(matches!(err, SqlLoaderError::Configuration(_)));
        assert!(err.to_string().contains("\"mysql\""));
    }

    #[test]
    fn defaults_to_postgres() {
        assert_eq!(DriverKind::default(), DriverKind::Postgres);
        assert_eq!(DriverKind::default().to_string(), "postgres");
    }
}
