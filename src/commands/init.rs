//! Schema initialization command

use crate::{config::SetupConfig, storage::BettingDatabase, storage::InitReport, Result};

use super::{print_json, report::render_init_report};

/// Create any missing tables and indexes.
///
/// Errors from the DDL abort the whole run; nothing is committed in that case.
pub fn run_init(config: &SetupConfig) -> Result<InitReport> {
    tracing::info!(
        database = %config.db_path.display(),
        foreign_keys = %config.foreign_keys,
        "Initializing database schema"
    );

    let mut db = BettingDatabase::open(config)?;
    db.initialize_schema()
}

/// Handle the `init` command
pub fn handle_init(config: &SetupConfig, as_json: bool) -> Result<()> {
    let report = run_init(config)?;

    if as_json {
        print_json(&report)?;
    } else {
        println!("{}", render_init_report(&report, &config.db_path));
    }

    Ok(())
}
