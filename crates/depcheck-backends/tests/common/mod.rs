use depcheck_backends::ConfigSection;
use rusqlite::Connection;
use std::path::Path;
use tempfile::TempDir;

/// Create a SQLite database in `dir` from a SQL script
#[allow(dead_code)]
pub fn sqlite_fixture(dir: &TempDir, file: &str, script: &str) -> std::path::PathBuf {
    let path = dir.path().join(file);
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(script).unwrap();
    path
}

/// Section pointing its connection string at `path`
#[allow(dead_code)]
pub fn section_for(name: &str, path: &Path) -> ConfigSection {
    ConfigSection::new(name)
        .with("connection_string", "sqlite://{path}")
        .with("path", path.display().to_string())
}
