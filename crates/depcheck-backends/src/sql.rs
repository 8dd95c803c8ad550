//! `SqlExecutor` backed by SQLite.

#![allow(clippy::result_large_err)]

use crate::db::open_read_only;
use crate::errors::{from_rusqlite, Result};
use depcheck_core::ports::{SqlExecutor, SqlValue};
use depcheck_core_types::Sensitive;
use rusqlite::types::{Value, ValueRef};

/// Opens a fresh read-only connection for every query
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteExecutor;

impl SqliteExecutor {
    pub fn new() -> Self {
        Self
    }
}

fn to_sqlite(value: &SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Integer(i) => Value::Integer(*i),
        SqlValue::Real(r) => Value::Real(*r),
        SqlValue::Text(s) => Value::Text(s.clone()),
    }
}

fn from_sqlite(value: ValueRef<'_>) -> SqlValue {
    match value {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(i) => SqlValue::Integer(i),
        ValueRef::Real(r) => SqlValue::Real(r),
        ValueRef::Text(t) | ValueRef::Blob(t) => {
            SqlValue::Text(String::from_utf8_lossy(t).into_owned())
        }
    }
}

impl SqlExecutor for SqliteExecutor {
    fn select(
        &self,
        connection: &Sensitive<String>,
        query: &str,
        params: &[SqlValue],
    ) -> Result<Vec<Vec<SqlValue>>> {
        let conn = open_read_only(connection.expose())?;
        let mut stmt = conn.prepare(query).map_err(from_rusqlite)?;
        let column_count = stmt.column_count();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter().map(to_sqlite)))
            .map_err(from_rusqlite)?;

        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(from_rusqlite)? {
            let mut cells = Vec::with_capacity(column_count);
            for i in 0..column_count {
                cells.push(from_sqlite(row.get_ref(i).map_err(from_rusqlite)?));
            }
            out.push(cells);
        }

        tracing::debug!(rows = out.len(), "sql select complete");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, Sensitive<String>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.sqlite");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE docs (doc_id TEXT, rev INTEGER, weight REAL, note TEXT);
             INSERT INTO docs VALUES ('DOC1', 3, 1.5, NULL);
             INSERT INTO docs VALUES ('DOC2', 1, 0.5, 'x');",
        )
        .unwrap();
        let connection = Sensitive::new(format!("sqlite://{}", path.display()));
        (dir, connection)
    }

    #[test]
    fn test_select_maps_cell_types() {
        let (_dir, connection) = fixture();
        let rows = SqliteExecutor::new()
            .select(
                &connection,
                "SELECT doc_id, rev, weight, note FROM docs ORDER BY doc_id",
                &[],
            )
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            vec![
                SqlValue::Text("DOC1".to_string()),
                SqlValue::Integer(3),
                SqlValue::Real(1.5),
                SqlValue::Null
            ]
        );
    }

    #[test]
    fn test_positional_parameters() {
        let (_dir, connection) = fixture();
        let rows = SqliteExecutor::new()
            .select(
                &connection,
                "SELECT doc_id FROM docs WHERE rev = ?1",
                &[SqlValue::Integer(1)],
            )
            .unwrap();
        assert_eq!(rows, vec![vec![SqlValue::Text("DOC2".to_string())]]);
    }

    #[test]
    fn test_connection_is_read_only() {
        let (_dir, connection) = fixture();
        let err = SqliteExecutor::new()
            .select(&connection, "DELETE FROM docs", &[])
            .unwrap_err();
        assert_eq!(err.kind(), depcheck_core::ExErrorKind::Backend);
    }

    #[test]
    fn test_bad_query_is_backend_error() {
        let (_dir, connection) = fixture();
        let err = SqliteExecutor::new()
            .select(&connection, "SELECT * FROM missing_table", &[])
            .unwrap_err();
        assert_eq!(err.code(), "ERR_BACKEND");
        assert!(err.message().contains("missing_table"));
    }
}
