//! Unit tests for configuration

use super::*;

#[test]
fn test_foreign_key_mode_default_is_enforced() {
    assert_eq!(ForeignKeyMode::default(), ForeignKeyMode::Enforced);
    assert!(ForeignKeyMode::default().is_enforced());
    assert!(!ForeignKeyMode::Advisory.is_enforced());
}

#[test]
fn test_foreign_key_mode_from_str() {
    assert_eq!(
        "enforced".parse::<ForeignKeyMode>().unwrap(),
        ForeignKeyMode::Enforced
    );
    assert_eq!(
        " Advisory ".parse::<ForeignKeyMode>().unwrap(),
        ForeignKeyMode::Advisory
    );
    assert_eq!("on".parse::<ForeignKeyMode>().unwrap(), ForeignKeyMode::Enforced);
    assert_eq!("off".parse::<ForeignKeyMode>().unwrap(), ForeignKeyMode::Advisory);
}

#[test]
fn test_foreign_key_mode_from_str_invalid() {
    match "strict".parse::<ForeignKeyMode>() {
        Err(SetupError::InvalidForeignKeyMode { value }) => assert_eq!(value, "strict"),
        other => panic!("Expected InvalidForeignKeyMode, got {:?}", other),
    }
}

#[test]
fn test_foreign_key_mode_display_round_trips() {
    for mode in [ForeignKeyMode::Enforced, ForeignKeyMode::Advisory] {
        assert_eq!(mode.to_string().parse::<ForeignKeyMode>().unwrap(), mode);
    }
}

#[test]
fn test_foreign_key_mode_apply() {
    let conn = Connection::open_in_memory().unwrap();

    ForeignKeyMode::Enforced.apply(&conn).unwrap();
    let on: i64 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(on, 1);

    ForeignKeyMode::Advisory.apply(&conn).unwrap();
    let off: i64 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(off, 0);
}

#[test]
fn test_setup_config_builder() {
    let config = SetupConfig::new("data/nba.db").with_foreign_keys(ForeignKeyMode::Advisory);
    assert_eq!(config.db_path, PathBuf::from("data/nba.db"));
    assert_eq!(config.foreign_keys, ForeignKeyMode::Advisory);

    let default = SetupConfig::default();
    assert_eq!(default.db_path, PathBuf::from(DEFAULT_DB_FILE));
    assert_eq!(default.foreign_keys, ForeignKeyMode::Enforced);
}

#[test]
fn test_resolve_db_path_prefers_flag() {
    let path = resolve_db_path(Some(PathBuf::from("/tmp/explicit.db")));
    assert_eq!(path, PathBuf::from("/tmp/explicit.db"));
}
