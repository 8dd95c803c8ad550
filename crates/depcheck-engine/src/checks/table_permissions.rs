use super::with_boundary_logging;
use crate::environment::{sections, CheckEnvironment};
use depcheck_backends::collect::collect_table_permissions;
use depcheck_core::errors::Result;
use depcheck_core::reconcile::reconcile_table_permissions;
use depcheck_core::{Category, CheckReport, ReportContext};

/// Grants held by the service user, read from the RACF unload database
///
/// Grants are filtered by the DB2 region when one is set.
///
/// # Errors
///
/// A missing user id, or manifest, configuration, backend, or pattern
/// failures abort the check.
pub fn check_table_permissions(env: &CheckEnvironment<'_>) -> Result<CheckReport> {
    with_boundary_logging(
        "check_table_permissions",
        env,
        Category::TablePermission.name(),
        || {
            let requested = env.manifest.requested_table_permissions()?;
            let user_id = env.require_user_id(Category::TablePermission)?;
            let section = env.config.section(sections::RACF_UNLOAD, None)?;

            let granted = collect_table_permissions(
                env.sql,
                &section,
                user_id,
                env.db2_region.as_deref(),
            )?;
            let failures = reconcile_table_permissions(&requested, &granted)?;
            Ok(CheckReport::new(
                Category::TablePermission,
                requested.len(),
                failures,
                &ReportContext::new(env.db2_region.clone()),
            ))
        },
    )
}
