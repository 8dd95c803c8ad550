//! Sequential multi-category runner

#![allow(clippy::result_large_err)]

use crate::checks;
use crate::environment::CheckEnvironment;
use depcheck_core::errors::{ExError, Result};
use depcheck_core::{Category, CheckReport};

/// Result of one category within a run
#[derive(Debug)]
pub struct CategoryOutcome {
    pub category: Category,
    pub result: std::result::Result<CheckReport, ExError>,
}

impl CategoryOutcome {
    /// True when the check completed and found no failures
    pub fn passed(&self) -> bool {
        matches!(&self.result, Ok(report) if report.passed)
    }
}

/// Run the check for one category
///
/// # Errors
///
/// Whatever the category's check returns.
pub fn run_check(env: &CheckEnvironment<'_>, category: Category) -> Result<CheckReport> {
    match category {
        Category::Template => checks::check_templates(env),
        Category::DataQuery => checks::check_data_queries(env),
        Category::TableStructure => checks::check_table_structure(env),
        Category::TablePermission => checks::check_table_permissions(env),
        Category::WorkflowMap => checks::check_workflow_maps(env),
    }
}

/// Run the given categories in order
///
/// An error in one category is recorded in its outcome and the run moves on.
pub fn run_checks(env: &CheckEnvironment<'_>, categories: &[Category]) -> Vec<CategoryOutcome> {
    categories
        .iter()
        .map(|&category| CategoryOutcome {
            category,
            result: run_check(env, category),
        })
        .collect()
}

/// True when every outcome passed
pub fn all_passed(outcomes: &[CategoryOutcome]) -> bool {
    outcomes.iter().all(CategoryOutcome::passed)
}
