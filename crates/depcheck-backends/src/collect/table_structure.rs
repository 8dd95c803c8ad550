use crate::collect::cell_text;
use crate::config::ConfigSection;
use crate::errors::{backend_data, Result};
use depcheck_core::model::{table_key, KeyedCollection, ProvisionedTableStructure};
use depcheck_core::ports::SqlExecutor;
use std::collections::{BTreeSet, HashMap};

/// Catalog columns of the application schemas
///
/// DB2 text for a production executor. `SqliteExecutor` cannot run it,
/// so SQLite-backed sections set `columns_query`.
pub const DEFAULT_COLUMNS_QUERY: &str =
    "SELECT TBCreator, TBName, Name FROM sysibm.syscolumns WHERE TBCreator IN ('DBA', 'OPERS') WITH UR";

/// Catalog tables of the application schemas
///
/// DB2 text for a production executor. `SqliteExecutor` cannot run it,
/// so SQLite-backed sections set `tables_query`.
pub const DEFAULT_TABLES_QUERY: &str =
    "SELECT Creator, Name FROM sysibm.systables WHERE Creator IN ('DBA', 'OPERS')";

const OP: &str = "collect_table_structure";

fn required_cell(row: &[depcheck_core::SqlValue], idx: usize) -> Result<String> {
    cell_text(OP, row, idx)?.ok_or_else(|| backend_data(OP, "catalog row has a NULL identifier"))
}

/// Tables with their columns from the database catalog
pub fn collect_table_structure(
    sql: &dyn SqlExecutor,
    section: &ConfigSection,
) -> Result<KeyedCollection<ProvisionedTableStructure>> {
    let connection = section.connection_string()?;
    let columns_query = section.query("columns_query", DEFAULT_COLUMNS_QUERY)?;
    let tables_query = section.query("tables_query", DEFAULT_TABLES_QUERY)?;

    let mut columns: HashMap<String, BTreeSet<String>> = HashMap::new();
    for row in sql.select(&connection, &columns_query, &[])? {
        let schema = required_cell(&row, 0)?;
        let table = required_cell(&row, 1)?;
        let column = required_cell(&row, 2)?;
        columns
            .entry(table_key(&schema, &table))
            .or_default()
            .insert(column);
    }

    let mut out = KeyedCollection::new();
    for row in sql.select(&connection, &tables_query, &[])? {
        let schema = required_cell(&row, 0)?;
        let table = required_cell(&row, 1)?;
        let table_columns = columns
            .remove(&table_key(&schema, &table))
            .unwrap_or_default();
        out.insert(ProvisionedTableStructure {
            schema,
            table,
            columns: table_columns,
        });
    }
    Ok(out)
}
