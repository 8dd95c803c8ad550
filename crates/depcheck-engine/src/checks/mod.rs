//! One check per resource category
//!
//! Each check reads its requested records from the manifest, collects the
//! provisioned side from its backend, reconciles the two, and assembles a
//! [`CheckReport`].
//!
//! ## Logging Ownership
//!
//! Checks are the logging boundary: they emit exactly one `start` event and
//! exactly one `end` or `end_error` event per run. Collectors, reconcilers,
//! and adapters below them only use `tracing::debug!`/`warn!` for detail.

#![allow(clippy::result_large_err)]

pub mod data_queries;
pub mod table_permissions;
pub mod table_structure;
pub mod templates;
pub mod workflow_maps;

pub use data_queries::check_data_queries;
pub use table_permissions::check_table_permissions;
pub use table_structure::check_table_structure;
pub use templates::check_templates;
pub use workflow_maps::check_workflow_maps;

use crate::environment::CheckEnvironment;
use depcheck_core::errors::Result;
use depcheck_core::report::describe_reason;
use depcheck_core::{log_op_end, log_op_error, log_op_start, CheckReport, Keyed};
use std::time::Instant;

/// Wrap a check body with the start/end/end_error boundary events
pub(crate) fn with_boundary_logging<F>(
    op: &'static str,
    env: &CheckEnvironment<'_>,
    category_name: &'static str,
    body: F,
) -> Result<CheckReport>
where
    F: FnOnce() -> Result<CheckReport>,
{
    let run_id = env.run.run_id.as_str();
    log_op_start!(op, category = category_name, run_id = run_id);
    let start = Instant::now();

    let report = body().map_err(|e| {
        log_op_error!(
            op,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            category = category_name,
            run_id = run_id
        );
        e
    })?;

    for failure in &report.failures {
        tracing::debug!(
            category = category_name,
            resource_key = %failure.requested.key(),
            detail = %describe_reason(&failure.reason),
            "requested resource not in place"
        );
    }

    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        category = category_name,
        run_id = run_id,
        requested = report.count,
        failures = report.failures.len(),
        passed = report.passed
    );
    Ok(report)
}
