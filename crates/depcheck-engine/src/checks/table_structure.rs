use super::with_boundary_logging;
use crate::environment::{sections, CheckEnvironment};
use depcheck_backends::collect::collect_table_structure;
use depcheck_core::errors::Result;
use depcheck_core::reconcile::reconcile_table_structure;
use depcheck_core::{Category, CheckReport, ReportContext};

/// Tables and their columns in the DB2 catalog
///
/// # Errors
///
/// Manifest, configuration, or backend failures abort the check.
pub fn check_table_structure(env: &CheckEnvironment<'_>) -> Result<CheckReport> {
    with_boundary_logging(
        "check_table_structure",
        env,
        Category::TableStructure.name(),
        || {
            let requested = env.manifest.requested_table_structures()?;
            let section = env
                .config
                .section(sections::DB2, env.db2_region.as_deref())?;

            let provisioned = collect_table_structure(env.sql, &section)?;
            let failures = reconcile_table_structure(&requested, &provisioned);
            Ok(CheckReport::new(
                Category::TableStructure,
                requested.len(),
                failures,
                &ReportContext::new(env.db2_region.clone()),
            ))
        },
    )
}
