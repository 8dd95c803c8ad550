use super::with_boundary_logging;
use crate::environment::{sections, CheckEnvironment};
use depcheck_backends::collect::collect_data_queries;
use depcheck_core::errors::Result;
use depcheck_core::reconcile::reconcile_data_queries;
use depcheck_core::{Category, CheckReport, ReportContext};

/// Data queries registered in the DB2 query table
///
/// # Errors
///
/// Manifest, configuration, or backend failures abort the check.
pub fn check_data_queries(env: &CheckEnvironment<'_>) -> Result<CheckReport> {
    with_boundary_logging("check_data_queries", env, Category::DataQuery.name(), || {
        let requested = env.manifest.requested_data_queries()?;
        let section = env
            .config
            .section(sections::DB2, env.db2_region.as_deref())?;

        let provisioned = collect_data_queries(env.sql, &section)?;
        let failures = reconcile_data_queries(&requested, &provisioned);
        Ok(CheckReport::new(
            Category::DataQuery,
            requested.len(),
            failures,
            &ReportContext::default(),
        ))
    })
}
