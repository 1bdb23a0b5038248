//! Catalog introspection over `sqlite_master` and the table pragmas

use super::{
    models::*,
    schema::{ColumnDef, IndexDef, TableDef, INDEXES, TABLES},
};
use crate::error::Result;
use rusqlite::{params, Connection, OptionalExtension};

/// Quote an identifier for interpolation into SQL
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Whether a table or index with this name exists
pub fn object_exists(conn: &Connection, kind: ObjectKind, name: &str) -> Result<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = ?1 AND name = ?2",
            params![kind.as_str(), name],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

/// User tables in creation order; engine tables such as `sqlite_sequence` are skipped
pub fn list_tables(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\'
         ORDER BY rowid",
    )?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names)
}

/// Named indexes; automatic indexes are skipped
pub fn list_indexes(conn: &Connection) -> Result<Vec<IndexInfo>> {
    let mut stmt = conn.prepare(
        "SELECT name, tbl_name FROM sqlite_master
         WHERE type = 'index' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\'
         ORDER BY rowid",
    )?;
    let indexes = stmt
        .query_map([], |row| {
            Ok(IndexInfo {
                name: row.get(0)?,
                table: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(indexes)
}

pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<ColumnInfo>> {
    let mut stmt = conn.prepare(
        "SELECT name, type, \"notnull\", dflt_value, pk
         FROM pragma_table_info(?1)
         ORDER BY cid",
    )?;
    let columns = stmt
        .query_map([table], |row| {
            Ok(ColumnInfo {
                name: row.get(0)?,
                sql_type: row.get(1)?,
                not_null: row.get::<_, i64>(2)? != 0,
                default_value: row.get(3)?,
                primary_key: row.get::<_, i64>(4)? != 0,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}

pub fn foreign_keys(conn: &Connection, table: &str) -> Result<Vec<ForeignKeyInfo>> {
    let mut stmt = conn.prepare(
        "SELECT \"from\", \"table\", \"to\"
         FROM pragma_foreign_key_list(?1)
         ORDER BY id DESC, seq",
    )?;
    let keys = stmt
        .query_map([table], |row| {
            Ok(ForeignKeyInfo {
                column: row.get(0)?,
                references_table: row.get(1)?,
                references_column: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(keys)
}

pub fn count_rows(conn: &Connection, table: &str) -> Result<u64> {
    let sql = format!("SELECT COUNT(*) FROM {}", quote_ident(table));
    let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(count as u64)
}

/// Columns covered by an index, in key order; expression keys show as `<expr>`
pub fn index_columns(conn: &Connection, index: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_index_info(?1) ORDER BY seqno")?;
    let columns = stmt
        .query_map([index], |row| {
            let name: Option<String> = row.get(0)?;
            Ok(name.unwrap_or_else(|| "<expr>".to_string()))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}

/// Whether the table's stored `CREATE TABLE` text declares `AUTOINCREMENT`
pub fn uses_autoincrement(conn: &Connection, table: &str) -> Result<bool> {
    let sql: Option<String> = conn
        .query_row(
            "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )
        .optional()?
        .flatten();
    Ok(sql.is_some_and(|sql| sql.to_uppercase().contains("AUTOINCREMENT")))
}

fn describe_declared(column: &ColumnDef) -> String {
    describe(
        column.sql_type,
        column.not_null,
        column.default_value,
        column.primary_key,
        column.primary_key,
    )
}

fn describe_live(column: &ColumnInfo, autoincrement: bool) -> String {
    describe(
        &column.sql_type,
        column.not_null,
        column.default_value.as_deref(),
        column.primary_key,
        column.primary_key && autoincrement,
    )
}

fn describe(
    sql_type: &str,
    not_null: bool,
    default: Option<&str>,
    primary_key: bool,
    autoincrement: bool,
) -> String {
    let mut desc = sql_type.to_uppercase();
    if primary_key {
        desc.push_str(" PRIMARY KEY");
    }
    if autoincrement {
        desc.push_str(" AUTOINCREMENT");
    }
    if not_null {
        desc.push_str(" NOT NULL");
    }
    if let Some(default) = default {
        desc.push_str(" DEFAULT ");
        desc.push_str(default);
    }
    desc
}

fn describe_reference(table: &str, column: &str) -> String {
    format!("{}({})", table, column)
}

/// Compare one live table against its declaration
pub fn check_table(conn: &Connection, table: &TableDef) -> Result<Vec<SchemaMismatch>> {
    let mut issues = Vec::new();
    let live_columns = table_columns(conn, table.name)?;

    if live_columns.is_empty() {
        issues.push(SchemaMismatch::MissingTable {
            table: table.name.to_string(),
        });
        return Ok(issues);
    }

    let autoincrement = uses_autoincrement(conn, table.name)?;
    for declared in table.columns {
        match live_columns.iter().find(|c| c.name == declared.name) {
            None => issues.push(SchemaMismatch::MissingColumn {
                table: table.name.to_string(),
                column: declared.name.to_string(),
            }),
            Some(live) => {
                let expected = describe_declared(declared);
                let found = describe_live(live, autoincrement);
                if expected != found {
                    issues.push(SchemaMismatch::ColumnDefinition {
                        table: table.name.to_string(),
                        column: declared.name.to_string(),
                        expected,
                        found,
                    });
                }
            }
        }
    }

    for live in &live_columns {
        if table.column(&live.name).is_none() {
            issues.push(SchemaMismatch::UnexpectedColumn {
                table: table.name.to_string(),
                column: live.name.clone(),
            });
        }
    }

    let live_keys = foreign_keys(conn, table.name)?;
    for declared in table.foreign_keys {
        let present = live_keys.iter().any(|k| {
            k.column == declared.column
                && k.references_table == declared.references_table
                && k.references_column == declared.references_column
        });
        if !present {
            issues.push(SchemaMismatch::MissingForeignKey {
                table: table.name.to_string(),
                column: declared.column.to_string(),
                references: describe_reference(
                    declared.references_table,
                    declared.references_column,
                ),
            });
        }
    }

    for live in &live_keys {
        let declared = table.foreign_keys.iter().any(|fk| {
            fk.column == live.column
                && fk.references_table == live.references_table
                && fk.references_column == live.references_column
        });
        if !declared {
            issues.push(SchemaMismatch::UnexpectedForeignKey {
                table: table.name.to_string(),
                column: live.column.clone(),
                references: describe_reference(&live.references_table, &live.references_column),
            });
        }
    }

    Ok(issues)
}

/// Compare one live index against its declaration
pub fn check_index(
    conn: &Connection,
    index: &IndexDef,
    live_indexes: &[IndexInfo],
) -> Result<Option<SchemaMismatch>> {
    let Some(live) = live_indexes.iter().find(|i| i.name == index.name) else {
        return Ok(Some(SchemaMismatch::MissingIndex {
            index: index.name.to_string(),
        }));
    };

    let expected = format!("{}({})", index.table, index.columns.join(", "));
    let found = format!(
        "{}({})",
        live.table,
        index_columns(conn, &live.name)?.join(", ")
    );
    if expected == found {
        Ok(None)
    } else {
        Ok(Some(SchemaMismatch::IndexDefinition {
            index: index.name.to_string(),
            expected,
            found,
        }))
    }
}

/// Compare the whole live catalog against the declared tables and indexes
pub fn check_schema(conn: &Connection) -> Result<Vec<SchemaMismatch>> {
    let mut issues = Vec::new();

    for table in TABLES.iter() {
        issues.extend(check_table(conn, table)?);
    }

    let live_indexes = list_indexes(conn)?;
    for index in INDEXES.iter() {
        issues.extend(check_index(conn, index, &live_indexes)?);
    }

    Ok(issues)
}
