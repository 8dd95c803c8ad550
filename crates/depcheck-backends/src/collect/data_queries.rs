use crate::collect::cell_text;
use crate::config::ConfigSection;
use crate::errors::Result;
use depcheck_core::model::{KeyedCollection, ProvisionedDataQuery};
use depcheck_core::ports::SqlExecutor;

/// Letter data query sequence table
///
/// DB2 text; SQLite-backed sections set `query` to match their fixture schema.
pub const DEFAULT_QUERY: &str = "SELECT DOC_ID FROM dba.CORT_LETTER_QUERY_seq";

/// Doc codes that have a letter data query
pub fn collect_data_queries(
    sql: &dyn SqlExecutor,
    section: &ConfigSection,
) -> Result<KeyedCollection<ProvisionedDataQuery>> {
    let connection = section.connection_string()?;
    let query = section.query("query", DEFAULT_QUERY)?;

    let mut out = KeyedCollection::new();
    for row in sql.select(&connection, &query, &[])? {
        if let Some(doc_code) = cell_text("collect_data_queries", &row, 0)? {
            out.insert(ProvisionedDataQuery { doc_code });
        }
    }
    Ok(out)
}
