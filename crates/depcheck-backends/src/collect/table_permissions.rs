use crate::collect::cell_text;
use crate::config::ConfigSection;
use crate::errors::{backend_data, Result};
use depcheck_core::model::{PermissionSet, ProvisionedTablePermission};
use depcheck_core::ports::{SqlExecutor, SqlValue};

/// RACF unload grants for a user; `?1` is the user id, `?2` the region filter
///
/// SQL Server text for a production executor. `SqliteExecutor` cannot run it,
/// so SQLite-backed sections set `query`.
pub const DEFAULT_QUERY: &str = "SELECT mem.GPMEM_MEMBER_ID AS USER_ID, mem.GPBD_NAME AS GROUP_NAME, access.GRBD_NAME AS PERMISSIONS \
FROM [IT_SEC_RacfUnload].dbo.getGroupMemberShipvw mem \
INNER JOIN [IT_SEC_RacfUnload].[dbo].[getTableAccessVw] access ON mem.GPBD_NAME = access.GRACC_AUTH_ID \
WHERE mem.GPMEM_MEMBER_ID = ?1 AND (access.GRBD_NAME LIKE ?2 OR access.GRBD_NAME LIKE '&%')";

const OP: &str = "collect_table_permissions";

/// Split a `PREFIX.SCHEMA.TABLE.ACCESS` grant into a permission row
pub fn parse_grant(grant: &str) -> Result<ProvisionedTablePermission> {
    let segments: Vec<&str> = grant.split('.').map(str::trim).collect();
    if segments.len() < 4 {
        return Err(backend_data(
            OP,
            format!("grant '{}' does not have PREFIX.SCHEMA.TABLE.ACCESS form", grant),
        )
        .with_resource_key(grant.to_string()));
    }
    Ok(ProvisionedTablePermission {
        schema: segments[1].to_string(),
        table: segments[2].to_string(),
        permissions: PermissionSet::from_access_code(segments[3]),
    })
}

/// Grant rows visible to `user_id` in `region`
pub fn collect_table_permissions(
    sql: &dyn SqlExecutor,
    section: &ConfigSection,
    user_id: &str,
    region: Option<&str>,
) -> Result<Vec<ProvisionedTablePermission>> {
    let connection = section.connection_string()?;
    let query = section.query("query", DEFAULT_QUERY)?;
    let params = [
        SqlValue::from(user_id),
        SqlValue::Text(format!("%{}%", region.unwrap_or(""))),
    ];

    let mut out = Vec::new();
    for row in sql.select(&connection, &query, &params)? {
        if let Some(grant) = cell_text(OP, &row, 2)? {
            out.push(parse_grant(&grant)?);
        }
    }
    Ok(out)
}
