//! Declarative schema definitions and database connection management

use super::{catalog, models::*};
use crate::{config::ForeignKeyMode, config::SetupConfig, error::Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// A single column in a table definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub not_null: bool,
    pub default_value: Option<&'static str>,
    pub primary_key: bool,
}

impl ColumnDef {
    const fn new(name: &'static str, sql_type: &'static str) -> Self {
        Self {
            name,
            sql_type,
            not_null: false,
            default_value: None,
            primary_key: false,
        }
    }

    const fn required(self) -> Self {
        Self {
            not_null: true,
            ..self
        }
    }

    const fn default_value(self, value: &'static str) -> Self {
        Self {
            default_value: Some(value),
            ..self
        }
    }

    /// Render the column clause used inside `CREATE TABLE`
    fn to_sql(&self) -> String {
        if self.primary_key {
            return format!("{} {} PRIMARY KEY AUTOINCREMENT", self.name, self.sql_type);
        }

        let mut sql = format!("{} {}", self.name, self.sql_type);
        if self.not_null {
            sql.push_str(" NOT NULL");
        }
        if let Some(default) = self.default_value {
            sql.push_str(" DEFAULT ");
            sql.push_str(default);
        }
        sql
    }
}

const fn id(name: &'static str) -> ColumnDef {
    ColumnDef {
        name,
        sql_type: "INTEGER",
        not_null: false,
        default_value: None,
        primary_key: true,
    }
}

const fn integer(name: &'static str) -> ColumnDef {
    ColumnDef::new(name, "INTEGER")
}

const fn real(name: &'static str) -> ColumnDef {
    ColumnDef::new(name, "REAL")
}

const fn text(name: &'static str) -> ColumnDef {
    ColumnDef::new(name, "TEXT")
}

const fn date(name: &'static str) -> ColumnDef {
    ColumnDef::new(name, "DATE")
}

const fn timestamp(name: &'static str) -> ColumnDef {
    ColumnDef::new(name, "TIMESTAMP")
}

const fn created_at() -> ColumnDef {
    timestamp("created_at").default_value("CURRENT_TIMESTAMP")
}

/// A declared (not cascading) foreign key reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKeyDef {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
}

const fn references(
    column: &'static str,
    references_table: &'static str,
    references_column: &'static str,
) -> ForeignKeyDef {
    ForeignKeyDef {
        column,
        references_table,
        references_column,
    }
}

/// A table in the betting schema
#[derive(Debug, Clone, Copy)]
pub struct TableDef {
    pub name: &'static str,
    pub description: &'static str,
    pub columns: &'static [ColumnDef],
    pub foreign_keys: &'static [ForeignKeyDef],
}

impl TableDef {
    /// Idempotent `CREATE TABLE IF NOT EXISTS` statement for this table
    pub fn create_sql(&self) -> String {
        let mut clauses: Vec<String> = self.columns.iter().map(ColumnDef::to_sql).collect();
        clauses.extend(self.foreign_keys.iter().map(|fk| {
            format!(
                "FOREIGN KEY ({}) REFERENCES {}({})",
                fk.column, fk.references_table, fk.references_column
            )
        }));

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            self.name,
            clauses.join(",\n    ")
        )
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// A secondary index in the betting schema
#[derive(Debug, Clone, Copy)]
pub struct IndexDef {
    pub name: &'static str,
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

impl IndexDef {
    /// Idempotent `CREATE INDEX IF NOT EXISTS` statement for this index
    pub fn create_sql(&self) -> String {
        format!(
            "CREATE INDEX IF NOT EXISTS {} ON {}({})",
            self.name,
            self.table,
            self.columns.join(", ")
        )
    }
}

pub const PLAYERS: TableDef = TableDef {
    name: "players",
    description: "Store player information",
    columns: &[
        id("player_id"),
        text("player_name").required(),
        text("team"),
        text("position"),
        integer("active").default_value("1"),
        created_at(),
    ],
    foreign_keys: &[],
};

pub const GAMES: TableDef = TableDef {
    name: "games",
    description: "Store game results",
    columns: &[
        id("game_id"),
        date("game_date").required(),
        text("home_team").required(),
        text("away_team").required(),
        integer("home_score"),
        integer("away_score"),
        real("pace"),
        text("season"),
        created_at(),
    ],
    foreign_keys: &[],
};

pub const PLAYER_GAME_STATS: TableDef = TableDef {
    name: "player_game_stats",
    description: "Store detailed player performance",
    columns: &[
        id("stat_id"),
        integer("player_id").required(),
        integer("game_id").required(),
        real("minutes_played"),
        integer("points"),
        integer("rebounds"),
        integer("assists"),
        integer("steals"),
        integer("blocks"),
        integer("turnovers"),
        integer("field_goals_made"),
        integer("field_goals_attempted"),
        integer("three_pointers_made"),
        integer("three_pointers_attempted"),
        integer("free_throws_made"),
        integer("free_throws_attempted"),
        integer("plus_minus"),
    ],
    foreign_keys: &[
        references("player_id", "players", "player_id"),
        references("game_id", "games", "game_id"),
    ],
};

pub const TEAM_STATS: TableDef = TableDef {
    name: "team_stats",
    description: "Store team metrics",
    columns: &[
        id("team_stat_id"),
        text("team_name").required(),
        date("game_date").required(),
        real("offensive_rating"),
        real("defensive_rating"),
        real("pace"),
        integer("wins"),
        integer("losses"),
        text("season"),
        created_at(),
    ],
    foreign_keys: &[],
};

pub const INJURIES: TableDef = TableDef {
    name: "injuries",
    description: "Track player injuries",
    columns: &[
        id("injury_id"),
        integer("player_id").required(),
        date("report_date").required(),
        text("status"),
        text("injury_type"),
        date("return_date"),
    ],
    foreign_keys: &[references("player_id", "players", "player_id")],
};

pub const BETTING_LINES: TableDef = TableDef {
    name: "betting_lines",
    description: "Store sportsbook odds",
    columns: &[
        id("line_id"),
        integer("game_id"),
        integer("player_id"),
        text("sportsbook").required(),
        timestamp("line_timestamp").required(),
        text("line_type").required(),
        text("prop_type"),
        real("line_value").required(),
        text("odds").required(),
        text("over_under"),
    ],
    foreign_keys: &[
        references("game_id", "games", "game_id"),
        references("player_id", "players", "player_id"),
    ],
};

pub const PREDICTIONS: TableDef = TableDef {
    name: "predictions",
    description: "Store model predictions",
    columns: &[
        id("prediction_id"),
        date("prediction_date").required(),
        integer("game_id"),
        integer("player_id"),
        text("prediction_type").required(),
        real("predicted_value").required(),
        real("confidence_score"),
        text("model_version"),
        real("actual_value"),
        integer("prediction_correct"),
    ],
    foreign_keys: &[
        references("game_id", "games", "game_id"),
        references("player_id", "players", "player_id"),
    ],
};

pub const BET_TRACKING: TableDef = TableDef {
    name: "bet_tracking",
    description: "Track actual bets and results",
    columns: &[
        id("bet_id"),
        integer("prediction_id"),
        date("bet_date").required(),
        real("bet_amount").required(),
        text("odds").required(),
        text("bet_type").required(),
        text("result"),
        real("profit_loss"),
        text("actual_outcome"),
        text("sportsbook"),
    ],
    foreign_keys: &[references("prediction_id", "predictions", "prediction_id")],
};

/// Every table, in creation order (parents before children)
pub static TABLES: [TableDef; 8] = [
    PLAYERS,
    GAMES,
    PLAYER_GAME_STATS,
    TEAM_STATS,
    INJURIES,
    BETTING_LINES,
    PREDICTIONS,
    BET_TRACKING,
];

pub static INDEXES: [IndexDef; 5] = [
    IndexDef {
        name: "idx_player_name",
        table: "players",
        columns: &["player_name"],
    },
    IndexDef {
        name: "idx_game_date",
        table: "games",
        columns: &["game_date"],
    },
    IndexDef {
        name: "idx_player_game",
        table: "player_game_stats",
        columns: &["player_id", "game_id"],
    },
    IndexDef {
        name: "idx_betting_lines_game",
        table: "betting_lines",
        columns: &["game_id"],
    },
    IndexDef {
        name: "idx_predictions_date",
        table: "predictions",
        columns: &["prediction_date"],
    },
];

/// Look up a table definition by name
pub fn table_def(name: &str) -> Option<&'static TableDef> {
    TABLES.iter().find(|t| t.name == name)
}

/// Database connection manager for the betting store
pub struct BettingDatabase {
    pub(crate) conn: Connection,
}

impl BettingDatabase {
    /// Open (creating if missing) the database described by `config`
    pub fn open(config: &SetupConfig) -> Result<Self> {
        if let Some(parent) = config.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(&config.db_path)?;
        Self::with_connection(conn, config.foreign_keys)
    }

    /// Open an existing database read-only; fails if the file does not exist
    pub fn open_existing(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// In-memory database, mostly for tests
    pub fn new_in_memory(foreign_keys: ForeignKeyMode) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn, foreign_keys)
    }

    fn with_connection(conn: Connection, foreign_keys: ForeignKeyMode) -> Result<Self> {
        foreign_keys.apply(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Create every table and index that does not exist yet.
    ///
    /// All DDL runs in one transaction: if any statement fails the whole
    /// initialization is rolled back and the error is returned. Existing
    /// objects and their rows are left untouched.
    pub fn initialize_schema(&mut self) -> Result<InitReport> {
        let tx = self.conn.transaction()?;
        let mut objects = Vec::with_capacity(TABLES.len() + INDEXES.len());

        for table in TABLES.iter() {
            let existed = catalog::object_exists(&tx, ObjectKind::Table, table.name)?;
            tracing::debug!(table = table.name, existed, "Creating table");
            tx.execute(&table.create_sql(), [])?;
            objects.push(SchemaObjectStatus {
                kind: ObjectKind::Table,
                name: table.name.to_string(),
                created: !existed,
            });
        }

        for index in INDEXES.iter() {
            let existed = catalog::object_exists(&tx, ObjectKind::Index, index.name)?;
            tracing::debug!(index = index.name, existed, "Creating index");
            tx.execute(&index.create_sql(), [])?;
            objects.push(SchemaObjectStatus {
                kind: ObjectKind::Index,
                name: index.name.to_string(),
                created: !existed,
            });
        }

        tx.commit()?;

        let report = InitReport { objects };
        tracing::info!(
            created = report.created_count(),
            existing = report.existing_count(),
            "Schema initialized"
        );
        Ok(report)
    }
}
