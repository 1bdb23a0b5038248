//! NBA Betting Database Library
//!
//! Creates the SQLite store used by the NBA betting analytics tools and
//! checks that it has the expected layout.
//!
//! ## Features
//!
//! - **Schema Initialization**: Eight tables and five indexes, created
//!   idempotently inside a single transaction
//! - **Verification**: Row counts per table plus a comparison of the live
//!   catalog against the declared schema
//! - **Foreign Key Policy**: Enforced by default, advisory on request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_betting_db::{commands::init::run_init, storage::verify_database, SetupConfig};
//!
//! # fn example() -> nba_betting_db::Result<()> {
//! let config = SetupConfig::new("nba_betting.db");
//! run_init(&config)?;
//!
//! let report = verify_database(&config.db_path);
//! assert!(report.success);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the database location to avoid passing `--db-path` every time:
//! ```bash
//! export NBA_BETTING_DB=/data/nba_betting.db
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use config::{resolve_db_path, ForeignKeyMode, SetupConfig};
pub use error::{Result, SetupError};

pub const DB_PATH_ENV_VAR: &str = "NBA_BETTING_DB";
pub const DEFAULT_DB_FILE: &str = "nba_betting.db";
