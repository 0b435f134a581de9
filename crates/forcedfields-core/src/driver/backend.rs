use super::Capability;
use crate::Result;

use std::{convert::Infallible, fmt, str::FromStr};
use url::Url;

/// Identifies the database engine a column is compiled for.
///
/// The forced fields branch on this identity when choosing type keywords and
/// DEFAULT clauses. Engines that are not recognized are carried as
/// [`Backend::Other`] and receive generic, degraded output rather than an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Backend {
    Mysql,
    Postgresql,
    Sqlite,
    Other(String),
}

impl Backend {
    /// Identifies the backend from a connection URL's scheme.
    ///
    /// ```
    /// # use forcedfields_core::Backend;
    /// let backend = Backend::from_url("postgresql://localhost/app").unwrap();
    /// assert_eq!(backend, Backend::Postgresql);
    /// ```
    pub fn from_url(url: &str) -> Result<Backend> {
        let url = Url::parse(url)?;

        Ok(Backend::from_name(url.scheme()))
    }

    fn from_name(name: &str) -> Backend {
        match name.to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Backend::Mysql,
            "postgres" | "postgresql" => Backend::Postgresql,
            "sqlite" | "sqlite3" => Backend::Sqlite,
            _ => Backend::Other(name.to_string()),
        }
    }

    pub fn capability(&self) -> &'static Capability {
        match self {
            Backend::Mysql => &Capability::MYSQL,
            Backend::Postgresql => &Capability::POSTGRESQL,
            Backend::Sqlite => &Capability::SQLITE,
            Backend::Other(_) => &Capability::GENERIC,
        }
    }

    pub fn is_mysql(&self) -> bool {
        matches!(self, Backend::Mysql)
    }

    pub fn is_postgresql(&self) -> bool {
        matches!(self, Backend::Postgresql)
    }

    pub fn is_sqlite(&self) -> bool {
        matches!(self, Backend::Sqlite)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Backend::Other(_))
    }

    /// The backend's spelling of "the current time" in DDL and DML.
    pub fn current_timestamp(&self) -> &'static str {
        "CURRENT_TIMESTAMP"
    }
}

impl FromStr for Backend {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Backend, Infallible> {
        Ok(Backend::from_name(s))
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Mysql => f.write_str("mysql"),
            Backend::Postgresql => f.write_str("postgresql"),
            Backend::Sqlite => f.write_str("sqlite"),
            Backend::Other(name) => f.write_str(name),
        }
    }
}
