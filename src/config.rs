//! Runtime configuration: database location and foreign key policy

use crate::error::{Result, SetupError};
use crate::{DB_PATH_ENV_VAR, DEFAULT_DB_FILE};
use rusqlite::Connection;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Whether SQLite enforces the declared foreign keys.
///
/// SQLite leaves enforcement off unless `PRAGMA foreign_keys` is set on each
/// connection. `Enforced` turns it on so orphan rows are rejected; `Advisory`
/// keeps the references as documentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ForeignKeyMode {
    /// Reject rows whose references do not exist
    #[default]
    Enforced,
    /// Store references without checking them
    Advisory,
}

impl ForeignKeyMode {
    pub fn is_enforced(&self) -> bool {
        matches!(self, ForeignKeyMode::Enforced)
    }

    /// Set `PRAGMA foreign_keys` on a connection.
    ///
    /// Must be called outside a transaction; SQLite ignores the pragma inside one.
    pub fn apply(&self, conn: &Connection) -> Result<()> {
        conn.pragma_update(None, "foreign_keys", self.is_enforced())?;
        Ok(())
    }
}

impl fmt::Display for ForeignKeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ForeignKeyMode::Enforced => "enforced",
            ForeignKeyMode::Advisory => "advisory",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ForeignKeyMode {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enforced" | "on" => Ok(ForeignKeyMode::Enforced),
            "advisory" | "off" => Ok(ForeignKeyMode::Advisory),
            _ => Err(SetupError::InvalidForeignKeyMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Where the database lives and how connections are configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    pub db_path: PathBuf,
    pub foreign_keys: ForeignKeyMode,
}

impl SetupConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            foreign_keys: ForeignKeyMode::default(),
        }
    }

    pub fn with_foreign_keys(mut self, foreign_keys: ForeignKeyMode) -> Self {
        self.foreign_keys = foreign_keys;
        self
    }
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILE)
    }
}

/// Resolve the database path: explicit flag, then `NBA_BETTING_DB`, then the default file.
pub fn resolve_db_path(db_path: Option<PathBuf>) -> PathBuf {
    db_path
        .or_else(|| {
            std::env::var(DB_PATH_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}

#[cfg(test)]
mod tests;
