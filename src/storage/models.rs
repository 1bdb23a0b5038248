//! Data models for the storage layer

use serde::Serialize;
use std::fmt;

/// Kind of schema object tracked in `sqlite_master`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Table,
    Index,
}

impl ObjectKind {
    /// The `type` value used by `sqlite_master`
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Table => "table",
            ObjectKind::Index => "index",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of creating one table or index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaObjectStatus {
    pub kind: ObjectKind,
    pub name: String,
    /// False when the object already existed and the statement was a no-op
    pub created: bool,
}

/// Result of a schema initialization run
#[derive(Debug, Clone, Default, Serialize)]
pub struct InitReport {
    pub objects: Vec<SchemaObjectStatus>,
}

impl InitReport {
    pub fn created_count(&self) -> usize {
        self.objects.iter().filter(|o| o.created).count()
    }

    pub fn existing_count(&self) -> usize {
        self.objects.iter().filter(|o| !o.created).count()
    }

    pub fn tables(&self) -> impl Iterator<Item = &SchemaObjectStatus> {
        self.objects.iter().filter(|o| o.kind == ObjectKind::Table)
    }

    pub fn indexes(&self) -> impl Iterator<Item = &SchemaObjectStatus> {
        self.objects.iter().filter(|o| o.kind == ObjectKind::Index)
    }
}

/// Column as reported by `pragma_table_info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub sql_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    pub primary_key: bool,
}

/// Foreign key as reported by `pragma_foreign_key_list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKeyInfo {
    pub column: String,
    pub references_table: String,
    pub references_column: String,
}

/// Index as reported by `sqlite_master`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexInfo {
    pub name: String,
    pub table: String,
}

/// Difference between the live catalog and the declared schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum SchemaMismatch {
    MissingTable {
        table: String,
    },
    MissingIndex {
        index: String,
    },
    MissingColumn {
        table: String,
        column: String,
    },
    UnexpectedColumn {
        table: String,
        column: String,
    },
    ColumnDefinition {
        table: String,
        column: String,
        expected: String,
        found: String,
    },
    MissingForeignKey {
        table: String,
        column: String,
        references: String,
    },
    UnexpectedForeignKey {
        table: String,
        column: String,
        references: String,
    },
    IndexDefinition {
        index: String,
        expected: String,
        found: String,
    },
}

impl fmt::Display for SchemaMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaMismatch::MissingTable { table } => write!(f, "missing table {}", table),
            SchemaMismatch::MissingIndex { index } => write!(f, "missing index {}", index),
            SchemaMismatch::MissingColumn { table, column } => {
                write!(f, "{}.{} is missing", table, column)
            }
            SchemaMismatch::UnexpectedColumn { table, column } => {
                write!(f, "{}.{} is not part of the schema", table, column)
            }
            SchemaMismatch::ColumnDefinition {
                table,
                column,
                expected,
                found,
            } => write!(
                f,
                "{}.{} expected `{}` but found `{}`",
                table, column, expected, found
            ),
            SchemaMismatch::MissingForeignKey {
                table,
                column,
                references,
            } => write!(f, "{}.{} should reference {}", table, column, references),
            SchemaMismatch::UnexpectedForeignKey {
                table,
                column,
                references,
            } => write!(f, "{}.{} references {} undeclared", table, column, references),
            SchemaMismatch::IndexDefinition {
                index,
                expected,
                found,
            } => write!(f, "index {} expected on {} but found on {}", index, expected, found),
        }
    }
}

/// Row count for one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRowCount {
    pub table: String,
    pub rows: u64,
}

/// Result of verifying a database file.
///
/// Verification never fails with an error; any problem is captured here and
/// `success` is set to false.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerificationReport {
    pub database: String,
    pub success: bool,
    pub total_tables: usize,
    pub total_rows: u64,
    pub tables: Vec<TableRowCount>,
    pub schema_issues: Vec<SchemaMismatch>,
    pub error: Option<String>,
}

impl VerificationReport {
    /// Report for a verification that could not complete
    pub fn failed(database: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn rows_in(&self, table: &str) -> Option<u64> {
        self.tables
            .iter()
            .find(|t| t.table == table)
            .map(|t| t.rows)
    }
}
