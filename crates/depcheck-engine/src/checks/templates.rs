use super::with_boundary_logging;
use crate::environment::CheckEnvironment;
use depcheck_backends::collect::collect_templates;
use depcheck_core::errors::Result;
use depcheck_core::reconcile::reconcile_templates;
use depcheck_core::{Category, CheckReport, ReportContext};
use std::collections::HashSet;

/// Document templates against both document-management systems
///
/// Versions are only fetched for doc codes that declare a minimum version.
///
/// # Errors
///
/// Manifest, configuration, or backend failures abort the check.
pub fn check_templates(env: &CheckEnvironment<'_>) -> Result<CheckReport> {
    with_boundary_logging("check_templates", env, Category::Template.name(), || {
        let requested = env.manifest.requested_templates()?;
        let (primary, secondary) = env.require_document_apis()?;

        let versioned: HashSet<String> = requested
            .iter()
            .filter(|req| req.min_version.is_some())
            .map(|req| req.doc_code.clone())
            .collect();

        let mut provisioned = collect_templates(primary, &versioned)?;
        // SmartCommunications wins on doc codes both systems hold
        provisioned.merge_last_writer_wins(collect_templates(secondary, &versioned)?);

        let failures = reconcile_templates(&requested, &provisioned);
        Ok(CheckReport::new(
            Category::Template,
            requested.len(),
            failures,
            &ReportContext::default(),
        ))
    })
}
