//! Unit tests for command handlers and report rendering

use super::report::*;
use super::*;
use crate::{
    config::{ForeignKeyMode, SetupConfig},
    storage::{
        InitReport, ObjectKind, SchemaMismatch, SchemaObjectStatus, TableRowCount,
        VerificationReport,
    },
    SetupError,
};
use std::path::Path;
use tempfile::TempDir;

fn sample_init_report(created: bool) -> InitReport {
    InitReport {
        objects: vec![
            SchemaObjectStatus {
                kind: ObjectKind::Table,
                name: "players".to_string(),
                created,
            },
            SchemaObjectStatus {
                kind: ObjectKind::Table,
                name: "games".to_string(),
                created,
            },
            SchemaObjectStatus {
                kind: ObjectKind::Index,
                name: "idx_player_name".to_string(),
                created,
            },
        ],
    }
}

fn sample_verification() -> VerificationReport {
    VerificationReport {
        database: "nba_betting.db".to_string(),
        success: true,
        total_tables: 2,
        total_rows: 5,
        tables: vec![
            TableRowCount {
                table: "players".to_string(),
                rows: 5,
            },
            TableRowCount {
                table: "games".to_string(),
                rows: 0,
            },
        ],
        schema_issues: vec![],
        error: None,
    }
}

#[test]
fn test_render_init_report_summary_lines() {
    let text = render_init_report(&sample_init_report(true), Path::new("nba_betting.db"));

    assert!(text.starts_with("Schema objects:"));
    assert!(text.contains("  table players: created"));
    assert!(text.contains("  index idx_player_name: created"));
    assert!(!text.contains("Creating"));
    assert!(text.contains("nba_betting.db (3 created, 0 already present)"));
    assert!(text.contains("1. players - Store player information"));
    assert!(text.contains("2. games - Store game results"));
    assert!(text.contains("Indexes: 1"));
}

#[test]
fn test_render_init_report_existing_objects() {
    let text = render_init_report(&sample_init_report(false), Path::new("nba_betting.db"));
    assert!(text.contains("  table games: already exists"));
    assert!(text.contains("(0 created, 3 already present)"));
}

#[test]
fn test_render_verification_lists_counts() {
    let text = render_verification(&sample_verification());

    assert!(text.contains("Total tables: 2"));
    assert!(text.contains("- players: 5 rows"));
    assert!(text.contains("- games: 0 rows"));
    assert!(text.contains("Total rows: 5"));
    assert!(!text.contains("❌"));
}

#[test]
fn test_render_verification_error() {
    let report = VerificationReport::failed("missing.db", "unable to open database file");
    let text = render_verification(&report);

    assert!(text.contains("Error verifying database: unable to open database file"));
    assert!(!text.contains("Total tables"));
}

#[test]
fn test_render_verification_schema_issues() {
    let mut report = sample_verification();
    report.success = false;
    report.schema_issues = vec![SchemaMismatch::MissingTable {
        table: "injuries".to_string(),
    }];

    let text = render_verification(&report);
    assert!(text.contains("Schema does not match (1 issues)"));
    assert!(text.contains("- missing table injuries"));
}

#[test]
fn test_render_completion_reflects_outcome() {
    let ok = sample_verification();
    assert!(render_completion(&ok).contains("Setup complete"));

    let failed = VerificationReport::failed("nba_betting.db", "boom");
    let text = render_completion(&failed);
    assert!(text.contains("failed verification"));
    assert!(!text.contains("Setup complete"));
}

#[test]
fn test_banner() {
    assert!(render_banner().contains("DATABASE SETUP"));
}

#[test]
fn test_setup_output_serializes() {
    let init = sample_init_report(true);
    let verification = sample_verification();
    let output = SetupOutput {
        database: "nba_betting.db".to_string(),
        foreign_keys: ForeignKeyMode::Enforced,
        init: &init,
        verification: &verification,
    };

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["foreign_keys"], "enforced");
    assert_eq!(json["init"]["objects"][0]["kind"], "table");
    assert_eq!(json["verification"]["total_rows"], 5);
}

#[test]
fn test_run_init_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = SetupConfig::new(temp_dir.path().join("nested").join("nba.db"));

    let report = init::run_init(&config).unwrap();
    assert_eq!(report.created_count(), 13);
    assert!(config.db_path.exists());
}

#[test]
fn test_handle_setup_fresh_database() {
    let temp_dir = TempDir::new().unwrap();
    let config = SetupConfig::new(temp_dir.path().join("nba_betting.db"));

    assert!(setup::handle_setup(&config, false).is_ok());
    // Second run is a no-op on the schema
    assert!(setup::handle_setup(&config, true).is_ok());
}

#[test]
fn test_handle_verify_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does_not_exist.db");

    match verify::handle_verify(&path, false) {
        Err(SetupError::VerificationFailed { path: reported }) => {
            assert!(reported.ends_with("does_not_exist.db"));
        }
        other => panic!("Expected VerificationFailed, got {:?}", other),
    }
    // Verification must not create the file
    assert!(!path.exists());
}

#[test]
fn test_handle_init_then_verify() {
    let temp_dir = TempDir::new().unwrap();
    let config = SetupConfig::new(temp_dir.path().join("nba_betting.db"));

    init::handle_init(&config, false).unwrap();
    assert!(verify::handle_verify(&config.db_path, true).is_ok());
}

#[test]
fn test_print_json() {
    assert!(print_json(&sample_verification()).is_ok());
}
