use crate::collect::cell_text;
use crate::config::ConfigSection;
use crate::errors::{backend_data, Result};
use depcheck_core::matching::parse_date;
use depcheck_core::model::{KeyedCollection, ProvisionedWorkflowMap};
use depcheck_core::ports::SqlExecutor;

/// Workflow process definitions, newest first; `{database}` comes from the section
///
/// SQL Server text for a production executor. `SqliteExecutor` cannot run it,
/// so SQLite-backed sections set `query`.
pub const DEFAULT_QUERY: &str = "SELECT [FYI_PROCNAME], [FYI_DATE_CREATED] \
FROM [{database}].[FYIADM].[FYI_WFPROCESS] main_q WITH (NOLOCK) \
ORDER BY [FYI_DATE_CREATED] DESC";

const OP: &str = "collect_workflow_maps";

/// Loaded workflow maps with the latest known creation date per name
///
/// A row with a NULL date still counts as loaded.
pub fn collect_workflow_maps(
    sql: &dyn SqlExecutor,
    section: &ConfigSection,
) -> Result<KeyedCollection<ProvisionedWorkflowMap>> {
    let connection = section.connection_string()?;
    let query = section.query("query", DEFAULT_QUERY)?;

    let mut out: KeyedCollection<ProvisionedWorkflowMap> = KeyedCollection::new();
    for row in sql.select(&connection, &query, &[])? {
        let Some(name) = cell_text(OP, &row, 0)? else {
            continue;
        };
        let modified = match cell_text(OP, &row, 1)? {
            Some(raw) => {
                // Timestamps carry a time part; only the calendar date matters
                let date_part: String = raw.chars().take(10).collect();
                Some(parse_date(&date_part).map_err(|_| {
                    backend_data(
                        OP,
                        format!("workflow map '{}' has unparsable date '{}'", name, raw),
                    )
                    .with_resource_key(name.clone())
                })?)
            }
            None => None,
        };

        // `None` orders first, so a dated row always replaces an undated one
        let newer = out.get(&name).map_or(true, |existing| existing.modified < modified);
        if newer {
            out.insert(ProvisionedWorkflowMap { name, modified });
        }
    }
    Ok(out)
}
