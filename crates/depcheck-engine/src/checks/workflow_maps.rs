use super::with_boundary_logging;
use crate::environment::{sections, CheckEnvironment};
use depcheck_backends::collect::collect_workflow_maps;
use depcheck_core::errors::Result;
use depcheck_core::reconcile::reconcile_workflow_maps;
use depcheck_core::{Category, CheckReport, ReportContext};

/// Workflow maps deployed to emVision
///
/// Failure lines name the emVision database as the region.
///
/// # Errors
///
/// Manifest, configuration, or backend failures abort the check.
pub fn check_workflow_maps(env: &CheckEnvironment<'_>) -> Result<CheckReport> {
    with_boundary_logging("check_workflow_maps", env, Category::WorkflowMap.name(), || {
        let requested = env.manifest.requested_workflow_maps()?;
        let section = env.config.section(sections::EMVISION, None)?;

        let provisioned = collect_workflow_maps(env.sql, &section)?;
        let failures = reconcile_workflow_maps(&requested, &provisioned);
        let region = section.get("database").map(str::to_string);
        Ok(CheckReport::new(
            Category::WorkflowMap,
            requested.len(),
            failures,
            &ReportContext::new(region),
        ))
    })
}
