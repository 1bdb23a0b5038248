//! Human-readable rendering of setup and verification reports.
//!
//! Storage returns structured reports; this module is the only place that
//! turns them into console text.

use std::path::Path;

use serde::Serialize;

use crate::{
    config::ForeignKeyMode,
    storage::{schema::table_def, InitReport, VerificationReport},
};

const RULE: &str = "============================================================";

/// Everything a `setup` run produced, for `--json` output
#[derive(Debug, Serialize)]
pub struct SetupOutput<'a> {
    pub database: String,
    pub foreign_keys: ForeignKeyMode,
    pub init: &'a InitReport,
    pub verification: &'a VerificationReport,
}

pub fn render_banner() -> String {
    [RULE, "NBA BETTING INTELLIGENCE SYSTEM - DATABASE SETUP", RULE].join("\n")
}

/// Summary of a committed initialization, one line per object, then the tables.
///
/// Rendered after the transaction commits, so this is not live progress; the
/// per-statement events are logged at debug level (`--verbose`) as they run.
pub fn render_init_report(report: &InitReport, db_path: &Path) -> String {
    let mut lines = vec!["Schema objects:".to_string()];

    for object in &report.objects {
        let status = if object.created {
            "created"
        } else {
            "already exists"
        };
        lines.push(format!("  {} {}: {}", object.kind, object.name, status));
    }

    lines.push(String::new());
    lines.push(RULE.to_string());
    lines.push(format!(
        "✓ Database ready: {} ({} created, {} already present)",
        db_path.display(),
        report.created_count(),
        report.existing_count()
    ));
    lines.push(RULE.to_string());
    lines.push("Tables:".to_string());

    for (i, table) in report.tables().enumerate() {
        match table_def(&table.name) {
            Some(def) => lines.push(format!("  {}. {} - {}", i + 1, table.name, def.description)),
            None => lines.push(format!("  {}. {}", i + 1, table.name)),
        }
    }

    let indexes = report.indexes().count();
    lines.push(format!("Indexes: {}", indexes));

    lines.join("\n")
}

/// Table row counts, or the reason verification failed
pub fn render_verification(report: &VerificationReport) -> String {
    let mut lines = vec!["📊 Database Verification:".to_string()];

    if let Some(error) = &report.error {
        lines.push(format!("❌ Error verifying database: {}", error));
        return lines.join("\n");
    }

    lines.push(format!("   Total tables: {}", report.total_tables));
    for table in &report.tables {
        lines.push(format!("   - {}: {} rows", table.table, table.rows));
    }
    lines.push(format!("   Total rows: {}", report.total_rows));

    if !report.schema_issues.is_empty() {
        lines.push(format!(
            "❌ Schema does not match ({} issues):",
            report.schema_issues.len()
        ));
        for issue in &report.schema_issues {
            lines.push(format!("   - {}", issue));
        }
    }

    lines.join("\n")
}

/// Final line printed by `setup`, reflecting the verification outcome
pub fn render_completion(report: &VerificationReport) -> String {
    if report.success {
        "✅ Setup complete! You can now run data collection scripts.".to_string()
    } else {
        format!("❌ Setup failed verification for {}", report.database)
    }
}

