//! CLI argument definitions and parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ForeignKeyMode;

#[derive(Debug, Parser)]
#[clap(
    name = "nba-betting-db",
    about = "Create and verify the NBA betting analytics database"
)]
pub struct NbaBettingDb {
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Database file (or set `NBA_BETTING_DB` env var). Defaults to `nba_betting.db`.
    #[clap(long, global = true)]
    pub db_path: Option<PathBuf>,

    /// Foreign key policy applied to connections opened for setup.
    #[clap(long, value_enum, global = true, default_value_t = ForeignKeyMode::Enforced)]
    pub foreign_keys: ForeignKeyMode,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// Show debug-level log events on stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Create missing tables and indexes, then verify the result (default)
    Setup,

    /// Create missing tables and indexes without verifying
    Init,

    /// Count rows per table and check the schema of an existing database
    Verify,
}
