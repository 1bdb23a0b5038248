//! Post-setup verification of a database file

use super::{catalog, models::*, schema::BettingDatabase};
use crate::error::Result;
use std::path::Path;

impl BettingDatabase {
    /// Count rows in every user table and compare the catalog against the schema
    pub fn verify(&self) -> Result<VerificationReport> {
        let names = catalog::list_tables(&self.conn)?;

        let mut tables = Vec::with_capacity(names.len());
        for name in names {
            let rows = catalog::count_rows(&self.conn, &name)?;
            tracing::debug!(table = %name, rows, "Counted rows");
            tables.push(TableRowCount { table: name, rows });
        }

        let schema_issues = catalog::check_schema(&self.conn)?;
        for issue in &schema_issues {
            tracing::warn!("Schema mismatch: {}", issue);
        }

        Ok(VerificationReport {
            database: String::new(),
            success: schema_issues.is_empty(),
            total_tables: tables.len(),
            total_rows: tables.iter().map(|t| t.rows).sum(),
            tables,
            schema_issues,
            error: None,
        })
    }
}

/// Verify the database at `path`.
///
/// The file is opened read-only and is never created. Every failure is
/// caught and reported through the returned report rather than as an error.
pub fn verify_database(path: &Path) -> VerificationReport {
    let database = path.display().to_string();

    let result = BettingDatabase::open_existing(path).and_then(|db| db.verify());
    match result {
        Ok(report) => {
            if report.success {
                tracing::info!(database = %database, tables = report.total_tables, "Verification passed");
            } else {
                tracing::warn!(
                    database = %database,
                    issues = report.schema_issues.len(),
                    "Verification found schema problems"
                );
            }
            VerificationReport { database, ..report }
        }
        Err(e) => {
            tracing::error!(database = %database, "Error verifying database: {}", e);
            VerificationReport::failed(database, e.to_string())
        }
    }
}
