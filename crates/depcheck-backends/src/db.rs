//! Database connection management
//!
//! Opens SQLite databases read-only for the SQL executor

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OpenFlags};

const SQLITE_PREFIX: &str = "sqlite://";

/// Strip the optional `sqlite://` scheme from a connection string
pub fn database_path(connection: &str) -> &str {
    let trimmed = connection.trim();
    trimmed.strip_prefix(SQLITE_PREFIX).unwrap_or(trimmed)
}

/// Open the database named by `connection` without write access
pub fn open_read_only(connection: &str) -> Result<Connection> {
    Connection::open_with_flags(
        database_path(connection),
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(from_rusqlite)
}
